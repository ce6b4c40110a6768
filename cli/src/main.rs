mod api;
mod chat;
mod render;

use clap::{Parser, Subcommand};
use exchange::{ChatSession, CustomerListing, DEFAULT_API_BASE, ListingView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::api::HttpApi;


const QUIT_COMMAND: &str = "/quit";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Error: Customer ID not found")]
    MissingCustomer,
    #[error("Error loading customers: {0}")]
    Listing(String),
    #[error("Error: {0}")]
    Exchange(String),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bake-cli", about = "Bake Assist customer list and chat client")]
struct Cli {
    #[arg(long, env = "BAKE_ASSIST_API_URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    #[arg(long, env = "BAKE_ASSIST_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all customers.
    Customers,
    /// Send a single message and print the reply.
    Send { customer_id: String, message: String },
    /// Interactive chat; `/quit` or EOF exits.
    Chat { customer_id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = HttpApi::new(&cli.api_url, cli.timeout_secs)?;
    tracing::debug!(base_url = api.base_url(), "backend configured");

    match cli.command {
        Command::Customers => run_customers(&api).await,
        Command::Send { customer_id, message } => run_send(&api, &customer_id, &message).await,
        Command::Chat { customer_id } => run_chat(&api, &customer_id).await,
    }
}

async fn run_customers(api: &HttpApi) -> Result<(), CliError> {
    let mut listing = CustomerListing::new();
    listing.resolve(api.fetch_customers().await);

    match listing.view() {
        ListingView::Loading => Ok(()),
        ListingView::Error(message) => Err(CliError::Listing(message.to_owned())),
        ListingView::Empty => {
            println!("No customers found.");
            Ok(())
        }
        ListingView::Table(customers) => {
            println!("{}", render::customers_table(customers));
            Ok(())
        }
    }
}

async fn run_send(api: &HttpApi, customer_id: &str, message: &str) -> Result<(), CliError> {
    let mut session = open_session(customer_id)?;
    let Some(line) = chat::exchange_once(api, &mut session, message).await else {
        return Ok(());
    };
    println!("{}", render::message_line(line));

    match session.last_error() {
        Some(error) => Err(CliError::Exchange(error.to_owned())),
        None => Ok(()),
    }
}

async fn run_chat(api: &HttpApi, customer_id: &str) -> Result<(), CliError> {
    let mut session = open_session(customer_id)?;
    println!("Agentic AI ChatBot for Customer: {}", session.customer_id().unwrap_or_default());
    for message in session.messages() {
        println!("{}", render::message_line(message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT_COMMAND {
            break;
        }
        if let Some(reply) = chat::exchange_once(api, &mut session, &line).await {
            println!("{}", render::message_line(reply));
        }
    }
    Ok(())
}

fn open_session(customer_id: &str) -> Result<ChatSession, CliError> {
    let session = ChatSession::new(Some(customer_id));
    if session.has_customer() {
        Ok(session)
    } else {
        Err(CliError::MissingCustomer)
    }
}
