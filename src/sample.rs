//! Built-in demo diagram, used by `--sample` and the `sample` subcommand.

pub const SAMPLE_LAYOUT: &str = "
+-----+-----+
|     A     |
+-----+-----+
|  B  |  C  |
+-----+-----+
";
