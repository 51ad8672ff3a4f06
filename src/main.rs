mod config;
mod palette;
mod render;
mod sample;

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use layout::Layout;

use config::RenderConfig;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {source_name}: {error}")]
    ReadInput {
        source_name: String,
        #[source]
        error: io::Error,
    },
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] io::Error),
    #[error("invalid palette: {0}")]
    Palette(#[from] palette::PaletteError),
    #[error("render failed: {0}")]
    Render(#[from] render::RenderError),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gridbox", about = "Turn ASCII box diagrams into CSS grid layouts")]
struct Cli {
    #[arg(long, env = "GRIDBOX_PALETTE", help = "Comma-separated hex colors assigned to boxes in order")]
    palette: Option<String>,

    #[arg(long, short, help = "Write to this file instead of stdout")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print detected boxes and grid bounds as JSON.
    Parse(InputArgs),
    /// Print the grid stylesheet.
    Css(InputArgs),
    /// Print a standalone HTML page.
    Html(HtmlArgs),
    /// Print the built-in sample diagram.
    Sample,
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(long, env = "GRIDBOX_INPUT", default_value = "-", help = "Diagram file path, or - for stdin")]
    input: String,

    #[arg(long, default_value_t = false, help = "Use the built-in sample diagram")]
    sample: bool,
}

#[derive(Args, Debug)]
struct HtmlArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, env = "GRIDBOX_TITLE")]
    title: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "error creating grid");
            ExitCode::FAILURE
        }
    }
}

/// Run the command and deliver its output to `--output` or stdout.
fn execute(cli: Cli) -> Result<(), CliError> {
    let output = cli.output.clone();
    let rendered = run(cli)?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "output written");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Produce the command's output text.
fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Sample => Ok(sample::SAMPLE_LAYOUT.trim_start_matches('\n').to_owned()),
        Command::Parse(input) => {
            let config = RenderConfig::from_args(cli.palette.as_deref(), None)?;
            let layout = load_layout(&input, &config)?;
            let mut json = serde_json::to_string_pretty(&render::report(&layout, &config.palette))?;
            json.push('\n');
            Ok(json)
        }
        Command::Css(input) => {
            let config = RenderConfig::from_args(cli.palette.as_deref(), None)?;
            let layout = load_layout(&input, &config)?;
            Ok(render::stylesheet(&layout, &config.palette)?)
        }
        Command::Html(args) => {
            let config = RenderConfig::from_args(cli.palette.as_deref(), args.title.as_deref())?;
            let layout = load_layout(&args.input, &config)?;
            Ok(render::html_document(&layout, &config)?)
        }
    }
}

fn load_layout(input: &InputArgs, config: &RenderConfig) -> Result<Layout, CliError> {
    let (source_name, text) = read_input(input)?;
    let layout = Layout::parse(&text, config.palette.len());
    tracing::info!(source = %source_name, boxes = layout.rects.len(), "layout parsed");
    Ok(layout)
}

fn read_input(input: &InputArgs) -> Result<(String, String), CliError> {
    if input.sample {
        return Ok(("sample".to_owned(), sample::SAMPLE_LAYOUT.to_owned()));
    }

    if input.input == "-" {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|error| CliError::ReadInput { source_name: "stdin".to_owned(), error })?;
        return Ok(("stdin".to_owned(), text));
    }

    let text = fs::read_to_string(&input.input)
        .map_err(|error| CliError::ReadInput { source_name: input.input.clone(), error })?;
    Ok((input.input.clone(), text))
}
