mod cmd_config;
mod cmd_convert;
mod cmd_stats;
mod config;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use turnstat_export::OutputFormat;

#[derive(Parser)]
#[command(
    name = "turnstat",
    version,
    about = "Convert tab-delimited dialogue transcripts into text, JSON, and chat formats"
)]
struct Cli {
    /// Config file (default: ./turnstat.json)
    #[arg(long = "config", global = true)]
    config_file: Option<PathBuf>,
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a transcript corpus into one or more output formats
    Convert {
        /// Input file (speaker<TAB>text<TAB>intent[<TAB>scores] per line)
        input: PathBuf,
        /// Output directory (overrides config output_dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Which rendering to write
        #[arg(long, value_enum, default_value_t = FormatArg::All)]
        format: FormatArg,
        /// Write the structured JSON without indentation
        #[arg(long)]
        compact: bool,
    },
    /// Print corpus statistics
    Stats {
        /// Input file
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read or write the config file
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    All,
    Text,
    Json,
    Chat,
}

impl FormatArg {
    fn formats(self) -> &'static [OutputFormat] {
        match self {
            FormatArg::All => &OutputFormat::ALL,
            FormatArg::Text => &[OutputFormat::Text],
            FormatArg::Json => &[OutputFormat::Records],
            FormatArg::Chat => &[OutputFormat::Chat],
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config_path = config::config_path(&cwd, cli.config_file.as_deref());

    match cli.cmd {
        Command::Convert {
            input,
            out_dir,
            format,
            compact,
        } => {
            let config = config::load(&config_path)?;
            cmd_convert::execute(
                &cmd_convert::ConvertParams {
                    input: &input,
                    out_dir: out_dir.as_deref(),
                    formats: format.formats(),
                    compact,
                },
                &config,
            )?;
            Ok(())
        }
        Command::Stats { input, json } => {
            let config = config::load(&config_path)?;
            cmd_stats::execute(&input, json, &config)
        }
        Command::Config { cmd } => cmd_config::run(cmd, &config_path),
    }
}
