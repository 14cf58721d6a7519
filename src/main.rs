use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use productor::application::session::CheckoutSession;
use productor::interfaces::csv::action_reader::ActionReader;
use productor::interfaces::csv::summary_writer::SummaryWriter;
use productor::interfaces::json::quote::{read_configuration, write_quote};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action script CSV file (`action,value` rows)
    input: PathBuf,

    /// JSON configuration record to start from instead of a blank cake
    #[arg(long)]
    start: Option<PathBuf>,

    /// Output format of the final summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter directive, e.g. `debug` or `productor=debug`
    #[arg(long, env = "PRODUCTOR_LOG", default_value = "warn")]
    log_level: String,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut session = match cli.start {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CheckoutSession::with_configuration(read_configuration(file).into_diagnostic()?)
        }
        None => CheckoutSession::new(),
    };

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                session.apply(action);
            }
            Err(e) => {
                warn!("Error reading action: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = SummaryWriter::new(stdout.lock());
            writer.write_summary(session.config()).into_diagnostic()?;
        }
        OutputFormat::Json => {
            write_quote(stdout.lock(), session.config()).into_diagnostic()?;
        }
    }

    Ok(())
}
