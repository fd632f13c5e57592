//! folio - command-line admin client for the portfolio backend.
//!
//! Browses the public site data, sends contact messages, and manages every
//! admin resource behind a bearer-token login.

mod commands;
mod output;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::Config;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::admin::AdminArea;
use commands::public::PublicResource;
use commands::App;

/// Daily log file name used when `log_dir` is configured
const LOG_FILE: &str = "folio.log";

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Admin client for the folio portfolio backend")]
struct Cli {
    /// Backend base URL (overrides FOLIO_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, env = "FOLIO_EMAIL")]
        email: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show the backend URL and whether a token is stored
    Status,

    /// Navigate to a site route, e.g. `/blogs/3` or `/admin/messages`
    Open {
        /// Route path
        path: String,
    },

    /// Browse public site content
    Public {
        #[command(subcommand)]
        resource: PublicResource,
    },

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Talk to the site assistant; reads lines from stdin when no message is given
    Chat {
        /// Single message to send
        message: Option<String>,

        /// Use the admin assistant (requires login)
        #[arg(long)]
        admin: bool,
    },

    /// Manage site content (requires login)
    Admin {
        #[command(subcommand)]
        area: AdminArea,
    },
}

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level (default `warn`). Output goes to stderr, or
/// to a daily rolling file when a log directory is configured; the returned
/// guard must live until exit so buffered lines are flushed.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load()?;
    let _log_guard = init_tracing(config.log_dir.as_deref());

    let mut app = App::new(config, cli.api_url.as_deref())?;
    info!(base_url = app.session.api().base_url(), "folio starting");

    match cli.command {
        Commands::Login { email } => commands::auth::login(&mut app, email).await,
        Commands::Logout => commands::auth::logout(&app),
        Commands::Status => commands::auth::status(&app).await,
        Commands::Open { path } => commands::auth::open(&mut app, &path).await,
        Commands::Public { resource } => commands::public::run(&app, resource).await,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => commands::public::contact(&app, name, email, subject, message).await,
        Commands::Chat { message, admin } => {
            commands::public::chat(&mut app, message, admin).await
        }
        Commands::Admin { area } => commands::admin::run(&mut app, area).await,
    }
}
