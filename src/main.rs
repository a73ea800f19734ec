use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_processor::application::process_payment::ProcessPayment;
use payment_processor::config::Config;
use payment_processor::domain::ports::CardFinderBox;
use payment_processor::infrastructure::in_memory::InMemoryCardStore;
use payment_processor::interfaces::csv::card_reader::CardReader;
use payment_processor::interfaces::json::{ErrorReply, PaymentReply, decode_request};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment request JSON file, or `-` to read it from stdin
    request: PathBuf,

    /// CSV file of cards (token,holder,expiration,brand) to load into the card store
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Path to a persistent card database. If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().into_diagnostic()?;

    let card_finder = card_finder(cli.cards.as_deref(), cli.db_path.as_deref()).await?;
    let gateway = config.acquirer_service(reqwest::Client::new());
    let use_case = ProcessPayment::new(card_finder, Box::new(gateway));

    let raw = read_request(&cli.request).into_diagnostic()?;
    let (reply, succeeded) = match decode_request(&raw) {
        Err(e) => (serde_json::to_string(&ErrorReply::from(e)), false),
        Ok(input) => match use_case.execute(input).await {
            Ok(output) => (serde_json::to_string(&PaymentReply::from(output)), true),
            Err(e) => (serde_json::to_string(&ErrorReply::from(&e)), false),
        },
    };

    println!("{}", reply.into_diagnostic()?);
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_request(path: &Path) -> io::Result<Vec<u8>> {
    let mut raw = Vec::new();
    if path == Path::new("-") {
        io::stdin().lock().read_to_end(&mut raw)?;
    } else {
        File::open(path)?.read_to_end(&mut raw)?;
    }
    Ok(raw)
}

async fn card_finder(cards: Option<&Path>, db_path: Option<&Path>) -> Result<CardFinderBox> {
    match db_path {
        Some(db_path) => persistent_store(db_path, cards).await,
        None => in_memory_store(cards).await,
    }
}

async fn in_memory_store(cards: Option<&Path>) -> Result<CardFinderBox> {
    let store = InMemoryCardStore::new();
    if let Some(cards) = cards {
        for card in CardReader::new(File::open(cards).into_diagnostic()?).cards() {
            match card {
                Ok(card) => store.insert(card).await,
                Err(e) => error!(error = %e, "Error reading card"),
            }
        }
    }
    debug!(cards = store.len().await, "in-memory card store ready");
    Ok(Box::new(store))
}

#[cfg(feature = "storage-rocksdb")]
async fn persistent_store(db_path: &Path, cards: Option<&Path>) -> Result<CardFinderBox> {
    use payment_processor::infrastructure::rocksdb::RocksDBCardStore;

    let store = RocksDBCardStore::open(db_path).into_diagnostic()?;
    if let Some(cards) = cards {
        for card in CardReader::new(File::open(cards).into_diagnostic()?).cards() {
            match card {
                Ok(card) => store.store(&card).await.into_diagnostic()?,
                Err(e) => error!(error = %e, "Error reading card"),
            }
        }
    }
    Ok(Box::new(store))
}

#[cfg(not(feature = "storage-rocksdb"))]
async fn persistent_store(_db_path: &Path, cards: Option<&Path>) -> Result<CardFinderBox> {
    tracing::warn!(
        "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
    );
    in_memory_store(cards).await
}
