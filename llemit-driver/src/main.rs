//! LLVM Textual IR Emitter Driver
//!
//! Command-line front end for the `llemit` library: renders built-in sample
//! modules or JSON-described modules to `.ll` text.

use clap::{Parser, Subcommand};
use llemit::ir::Module;
use llemit::{samples, Generate};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "llemit")]
#[command(about = "Emit LLVM textual IR from a typed object model")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one of the built-in sample modules
    Sample {
        /// Which sample to render (hello, memory)
        #[arg(short, long, default_value = "hello")]
        name: String,

        /// Print the JSON model instead of the rendered IR
        #[arg(long)]
        json: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a module described in a JSON file
    Emit {
        /// JSON module description
        input: PathBuf,

        /// Output `.ll` file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sample { name, json, output } => run_sample(&name, json, output.as_deref()),
        Commands::Emit { input, output } => run_emit(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run_sample(name: &str, json: bool, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let module = samples::by_name(name).ok_or_else(|| {
        format!(
            "unknown sample '{}' (available: {})",
            name,
            samples::SAMPLE_NAMES.join(", ")
        )
    })??;
    debug!("built sample '{}' with {} items", name, module.items.len());

    let text = if json {
        let mut text = serde_json::to_string_pretty(&module)?;
        text.push('\n');
        text
    } else {
        module.generate()?
    };
    write_output(&text, output)
}

fn run_emit(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input)?;
    let module: Module = serde_json::from_str(&source)
        .map_err(|e| format!("{}: invalid module description: {}", input.display(), e))?;
    debug!("loaded {} items from {}", module.items.len(), input.display());

    let text = module.generate()?;
    write_output(&text, output)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
