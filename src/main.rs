use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waterio::{run_counter, Counter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial counter value
    #[arg(short, long, env = "WATERIO_START", default_value_t = 0, allow_negative_numbers = true)]
    start: i64,
    /// How many times to increment
    #[arg(short, long, env = "WATERIO_TIMES", default_value_t = 3)]
    times: u64,
    /// Print a single JSON report instead of one value per line
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = parse_command_line_args();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_tracing(&args.log_dir)?;

    let mut counter = Counter::new(args.start);
    let stdout = io::stdout();
    run_counter(&mut counter, args.times, args.json, &mut stdout.lock())?;

    Ok(())
}

fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("trace.log")
        .build(log_dir)
        .map_err(|e| format!("cannot open log directory {}: {e}", log_dir.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
