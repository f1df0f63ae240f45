//! Console front end: translates CLI gestures into controller actions.
//!
//! This binary owns only thin glue — argument parsing, config and subscriber
//! init, and the concrete collaborators behind the controller's seams. All
//! classification and rendering decisions live in the library.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use post_console::{
    AppConfig, Connectivity, Controller, Form, FormData, Message, MessageSink, ReqwestTransport,
    UreqTransport,
};
use post_core::PostClient;

/// CRUD console for the post service
#[derive(Debug, Parser)]
#[command(name = "post-console", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read one post and display its title and body
    Fetch {
        /// Post id to read
        id: String,
        /// Take the read through the alternate transport
        #[arg(long)]
        alternate: bool,
    },
    /// Create a post (no id) or update one (id given)
    Submit {
        /// Post id; leave empty to create
        #[arg(long, default_value = "")]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// Delete a post by id
    Delete {
        #[arg(long, default_value = "")]
        id: String,
    },
}

/// Form backed by the parsed CLI arguments.
struct ArgsForm {
    data: FormData,
}

impl Form for ArgsForm {
    fn read(&self) -> FormData {
        self.data.clone()
    }

    fn reset(&mut self) {
        self.data = FormData::default();
    }
}

/// Renders each outcome view as a fresh block on stdout, standing in for the
/// display region the browser front end replaces.
struct ConsoleScreen;

impl MessageSink for ConsoleScreen {
    fn show(&mut self, message: Message) {
        println!("[{}] {}", message.kind.label(), message.title);
        if let Some(detail) = &message.detail {
            for line in detail.lines() {
                println!("  {line}");
            }
        }
    }
}

/// Ambient connectivity signal. The terminal has no `navigator.onLine`
/// equivalent, so an explicit override variable stands in for it.
struct EnvConnectivity;

impl Connectivity for EnvConnectivity {
    fn is_online(&self) -> bool {
        std::env::var("POST_CONSOLE_OFFLINE").map(|v| v != "1").unwrap_or(true)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let form = match &cli.command {
        Commands::Fetch { .. } => FormData::default(),
        Commands::Submit { id, title, body } => FormData {
            id: id.clone(),
            title: title.clone(),
            body: body.clone(),
        },
        Commands::Delete { id } => FormData {
            id: id.clone(),
            ..FormData::default()
        },
    };

    let alternate = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut controller = Controller::new(
        PostClient::new(&config.api_base),
        Box::new(UreqTransport::new()),
        Box::new(alternate),
        Box::new(EnvConnectivity),
        Box::new(ArgsForm { data: form }),
        Box::new(ConsoleScreen),
    );

    match cli.command {
        Commands::Fetch { id, alternate: false } => controller.fetch_post(&id),
        Commands::Fetch { id, alternate: true } => controller.fetch_post_alternate(&id),
        Commands::Submit { .. } => controller.submit(),
        Commands::Delete { .. } => controller.delete_post(),
    }
}
