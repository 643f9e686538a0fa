//! # Client Binary Entry Point
//!
//! Runs one operation against a ticket endpoint and prints the resulting page.
//!
//! ## Usage
//!
//! ```bash
//! # Obtain a ticket, smuggling extra JSON through the info field
//! cargo run --bin client -- --endpoint http://127.0.0.1:8080/cgi-bin/ticket \
//!   login --info '{"note":"hi"}'
//!
//! # Replay a modified ciphertext
//! cargo run --bin client -- --config config/client.toml auth --ticket 4c6f...
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::info;

use ticketforge::client::ui::{self, MemoryPage, SurfaceState};
use ticketforge::common::config::ClientConfig;
use ticketforge::common::logging::init_logger;
use ticketforge::TicketClient;

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the client configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Endpoint URL; overrides the one in the config file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request a ticket
    Login {
        /// JSON fragment sent as the `info` value, exactly as typed
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        info: String,
    },
    /// Replay a ciphertext against the endpoint
    Auth {
        /// Hex ciphertext to submit
        #[arg(short, long)]
        ticket: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let endpoint = match (args.endpoint, args.config) {
        (Some(endpoint), _) => endpoint,
        (None, Some(path)) => {
            let config = ClientConfig::from_file(&path)?;
            info!("Client '{}' loaded config from {}", config.client.name, path);
            config.client.endpoint
        }
        (None, None) => bail!("either --endpoint or --config must be given"),
    };

    let page = MemoryPage::new();
    let elements = page.elements()?;
    let client = TicketClient::new(endpoint, &elements);

    match args.command {
        Command::Login { info } => {
            page.set_input(ui::INFO, &info);
            client.login().await?;
            print_message(&page.state(ui::MSG_LOGIN));
            print_field("Ciphertext", &page.state(ui::LOGIN_CIPHERTEXT));
            print_field("Plaintext", &page.state(ui::LOGIN_PLAINTEXT));
            print_field("Decoded", &page.state(ui::LOGIN_PLAINTEXT_PRETTY));
        }
        Command::Auth { ticket } => {
            page.set_input(ui::AUTH_CIPHERTEXT, &ticket);
            client.authenticate().await?;
            print_message(&page.state(ui::MSG_AUTH));
            print_field("Plaintext", &page.state(ui::AUTH_PLAINTEXT));
            print_field("Decoded", &page.state(ui::AUTH_PLAINTEXT_PRETTY));
        }
    }

    Ok(())
}

fn print_message(state: &SurfaceState) {
    if state.visible {
        println!("[{}] {}", state.class, state.content);
    }
}

fn print_field(label: &str, state: &SurfaceState) {
    if state.value.is_empty() {
        return;
    }
    println!("\n{}:", label);
    println!("{}", state.value.trim_end_matches('\n'));
}
