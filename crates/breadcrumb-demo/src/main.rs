use std::path::PathBuf;
use std::process::ExitCode;

use breadcrumb_demo::{init_logging, render_html, run_usage, RenderConfig};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "breadcrumb-demo")]
#[command(about = "Render a breadcrumb trail or walk through the trail API")]
struct Args {
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Print the trail as an HTML paragraph
    Render {
        /// JSON render config (defaults to the built-in MDN trail)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Push, pop, peek and search a trail, then print a JSON report
    Usage,
}

fn run(args: Args) -> breadcrumb_demo::Result<()> {
    match args.command.unwrap_or(Mode::Render { config: None }) {
        Mode::Render { config } => {
            let config = match config {
                Some(path) => RenderConfig::load(&path)?,
                None => RenderConfig::default(),
            };
            print!("{}", render_html(&config.trail(), &config));
        }
        Mode::Usage => {
            let report = run_usage()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "breadcrumb-demo failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
