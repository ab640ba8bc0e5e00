use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use lrs_core::PatternLibrary;
use services::{AssessmentSession, BackendConfig, Clock, HttpBackend};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod console;
mod export_sink;

use console::Console;
use export_sink::ExportSink;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBackend { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBackend { raw } => write!(f, "invalid --backend value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  lrs run    [--backend <url>] [--timeout-secs <n>] [--export-dir <dir>]");
    eprintln!("  lrs health [--backend <url>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend http://localhost:5000");
    eprintln!("  --timeout-secs 15");
    eprintln!("  --export-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LRS_BACKEND_URL, LRS_REQUEST_TIMEOUT_SECS, LRS_EXPORT_DIR, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Health,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "run" => Some(Self::Run),
            "health" => Some(Self::Health),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    backend: BackendConfig,
    export_dir: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut backend = BackendConfig::from_env();
        let mut export_dir = std::env::var("LRS_EXPORT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => {
                    let value = require_value(args, "--backend")?;
                    let trimmed = value.trim();
                    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                        return Err(ArgsError::InvalidBackend { raw: value });
                    }
                    backend.base_url = trimmed.to_owned();
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs: u64 = value
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    backend.request_timeout = Duration::from_secs(secs);
                }
                "--export-dir" => {
                    export_dir = PathBuf::from(require_value(args, "--export-dir")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            backend,
            export_dir,
        })
    }
}

fn init_tracing() {
    // Logs go to stderr so the console owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means `run`.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Run,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Run,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    info!(backend = %parsed.backend.base_url, timeout = ?parsed.backend.request_timeout, "starting");
    let backend = HttpBackend::new(parsed.backend)?;

    match cmd {
        Command::Health => {
            let health = backend.health().await?;
            println!(
                "{} ({})",
                health.status,
                health.version.as_deref().unwrap_or("unknown version")
            );
            Ok(())
        }
        Command::Run => {
            let library = PatternLibrary::builtin()?;
            let mut session = AssessmentSession::new(library, Clock::system());
            if let Err(err) = session.load_questions(&backend).await {
                warn!(error = %err, "continuing without questions");
            }

            let sink = ExportSink::new(parsed.export_dir);
            info!(export_dir = %sink.dir().display(), "plans will be exported as JSON");
            let mut console = Console::new(session, &backend, Some(&sink), std::io::stdout());
            console.run(BufReader::new(tokio::io::stdin())).await?;
            info!(view = ?console.session().view(), "session ended");
            console.into_output().flush()?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
