use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use keycount::controller::{Controller, Request, TelemetryDecorator, UserController};
use keycount::{CountBase, file_pipeline};
use owo_colors::OwoColorize;
use std::ffi::OsString;
use std::time::Duration;

const DEFAULT_ENV_FILE: &str = ".env";

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// keycount: tally the first field of every line and write the counts as JSON
#[derive(Parser)]
#[command(name = "keycount", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source settings from (skipped if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_ENV_FILE)]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract lines from a text file, count first fields, load them as JSON
    Run {
        /// Text file to read, one comma-delimited record per line
        #[arg(env = "KEYCOUNT_INPUT", default_value = "input.txt")]
        input: String,

        /// JSON file to write the counts to
        #[arg(env = "KEYCOUNT_OUTPUT", default_value = "output.json")]
        output: String,

        /// Record 1 for a key's first occurrence instead of 0
        #[arg(long)]
        one_based: bool,
    },

    /// Send one request through the timed user controller
    Request {
        /// Request method
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request URL
        #[arg(short, long, default_value = "/users")]
        url: String,

        /// Simulated controller latency in milliseconds
        #[arg(long, default_value_t = 200)]
        latency_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // The dotenv file must be loaded before clap reads KEYCOUNT_* variables
    load_env_file(env_file_arg(std::env::args_os()))?;
    let cli = Cli::parse();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();
    log::debug!("Settings sourced from {}", cli.env.bright_black());

    match cli.command {
        Commands::Run {
            input,
            output,
            one_based,
        } => {
            let base = match one_based {
                true => CountBase::One,
                false => CountBase::Zero,
            };
            log::info!(
                "Counting keys from {} into {}",
                input.bright_black(),
                output.bright_black()
            );
            let mut pipeline = file_pipeline(&input, &output, base);
            let count = pipeline.run().await?;
            log::info!("Process completed: {} keys", count.cyan());
        }
        Commands::Request {
            method,
            url,
            latency_ms,
        } => {
            let controller = TelemetryDecorator::new(
                UserController::new().with_latency(Duration::from_millis(latency_ms)),
            );
            let response = controller.process(Request::new(method, url)).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Find the `--env` value without running the full parser
fn env_file_arg(args: impl IntoIterator<Item = OsString>) -> OsString {
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if arg == "--env" || arg == "-e" {
            return args.next().unwrap_or_else(|| DEFAULT_ENV_FILE.into());
        }
        let Some(arg) = arg.to_str() else {
            continue;
        };
        if let Some(value) = arg.strip_prefix("--env=") {
            return value.into();
        }
        if let Some(value) = arg.strip_prefix("-e").filter(|v| !v.is_empty()) {
            return value.trim_start_matches('=').into();
        }
    }
    DEFAULT_ENV_FILE.into()
}

/// Source a dotenv file; a missing file is fine, a malformed one is not
fn load_env_file(path: OsString) -> Result<()> {
    match dotenvy::from_filename(&path) {
        Err(e) if e.not_found() => Ok(()),
        other => other.map(|_| ()).map_err(Into::into),
    }
}
