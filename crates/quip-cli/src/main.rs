//! quip CLI
//!
//! Command-line interface for quip - quote lookup, favorites, and sharing.

use std::fs::File;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quip_core::{Config, Session};

mod api;
mod commands;
mod interactive;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "quip")]
#[command(about = "quip - quote lookup, favorites, and sharing")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Random quote for a topic
    Topic {
        /// Topic to look up (defaults to the last one used)
        topic: Option<String>,

        /// List every match instead of picking one at random
        #[arg(long)]
        all: bool,
    },
    /// Fetch a quote from the remote API
    Fetch,
    /// List known topics
    Topics,
    /// Manage favorite quotes
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
    /// Show or set the theme
    Theme {
        /// Theme name (shows the current theme when omitted)
        name: Option<String>,
    },
    /// Print share forms for a quote
    Share {
        /// Quote text
        content: String,

        /// Quote author
        #[arg(short, long)]
        author: String,

        /// Base URL for a decodable deep link
        #[arg(long)]
        base: Option<String>,

        /// Open the tweet URL in a browser
        #[arg(long)]
        open: bool,
    },
    /// Display the quote carried by a share link
    View {
        /// Share link produced by `quip share --base ...`
        link: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// Toggle a quote in the favorites set
    Toggle {
        /// Quote text
        content: String,

        /// Quote author
        #[arg(short, long)]
        author: String,
    },
    /// Remove a quote from the favorites set
    #[command(alias = "rm")]
    Remove {
        /// Quote text
        content: String,

        /// Quote author
        #[arg(short, long)]
        author: String,
    },
    /// List favorites, newest first
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, api_url, max_recent, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need a session
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let mut session = Session::open()?;
    init_logging(session.config());

    // Interactive session is the default when no command is given
    let Some(command) = cli.command else {
        if !atty::is(atty::Stream::Stdin) {
            anyhow::bail!("No command given and stdin is not a terminal. Try: quip topic love");
        }
        return interactive::run(&mut session, &output).await;
    };

    match command {
        Commands::Topic { topic, all } => {
            commands::quote::topic(&mut session, topic, all, &output)
        }
        Commands::Fetch => commands::quote::fetch(&mut session, &output).await,
        Commands::Topics => commands::quote::topics(&session, &output),
        Commands::Fav { command } => handle_fav_command(command, &mut session, &output),
        Commands::Theme { name } => match name {
            Some(name) => commands::theme::set(&mut session, name, &output),
            None => commands::theme::show(&session, &output),
        },
        Commands::Share {
            content,
            author,
            base,
            open,
        } => commands::share::share(content, author, base, open, &output),
        Commands::View { link } => commands::share::view(&mut session, link, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_fav_command(command: FavCommands, session: &mut Session, output: &Output) -> Result<()> {
    match command {
        FavCommands::Toggle { content, author } => {
            commands::favorite::toggle(session, content, author, output)
        }
        FavCommands::Remove { content, author } => {
            commands::favorite::remove(session, content, author, output)
        }
        FavCommands::List => commands::favorite::list(session, output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize file-based logging under the data directory
///
/// Logging must never break the CLI; failures are reported and ignored.
fn init_logging(config: &Config) {
    let log_path = config.log_path();

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quip_core=info,quip_cli=info"));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();
}
