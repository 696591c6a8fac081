//! Terminal front end for the shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when omitted)
//! shortlink-client shorten https://example.com
//!
//! # Click count for the latest conversion, an id, or a short URL
//! shortlink-client analytics
//! shortlink-client analytics Xk3_a9Qz
//!
//! # Recent conversions (last 5)
//! shortlink-client history
//!
//! # Theme preference
//! shortlink-client theme dark
//! shortlink-client theme toggle
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTLINK_API_URL` - Service URL (default: `http://localhost:3000`)
//! - `SHORTLINK_STATE_DIR` - Where `theme.json` and `recent.json` live

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Input;
use shortlink::client::state::default_state_dir;
use shortlink::client::{ClientState, Notification, ShortenerApp, ShortenerClient, Theme};
use tracing_subscriber::EnvFilter;

/// Shorten URLs and check their click counts.
#[derive(Parser)]
#[command(name = "shortlink-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortener service URL
    #[arg(long, env = "SHORTLINK_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Directory for local state
    #[arg(long, env = "SHORTLINK_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Fetch the click count right after shortening
        #[arg(short, long)]
        analytics: bool,
    },

    /// Show the click count of a short link
    Analytics {
        /// Short URL or id (defaults to the most recent conversion)
        target: Option<String>,
    },

    /// List recent conversions
    History,

    /// Show or change the theme
    Theme {
        /// New theme, or `toggle` to switch (shows the current one when omitted)
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

/// Colors for the active theme.
struct Palette {
    theme: Theme,
}

impl Palette {
    fn accent(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.blue().bold(),
            Theme::Dark => text.bright_cyan().bold(),
        }
    }

    fn muted(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.bright_black(),
            Theme::Dark => text.white().dimmed(),
        }
    }

    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Success(message) => println!("{}", message.green().bold()),
            Notification::Error(message) => eprintln!("{}", message.red().bold()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Runs one command; `Ok(false)` means the action ended in an error notification.
async fn run(cli: Cli) -> Result<bool> {
    let state_dir = cli.state_dir.unwrap_or_else(default_state_dir);
    let state = ClientState::load(state_dir);
    let client = ShortenerClient::new(&cli.api_url)?;
    let mut app = ShortenerApp::new(client, state);

    match cli.command {
        Commands::Shorten { url, analytics } => shorten(&mut app, url, analytics).await,
        Commands::Analytics { target } => show_analytics(&mut app, target).await,
        Commands::History => {
            show_history(&app);
            Ok(true)
        }
        Commands::Theme { choice } => set_theme(&mut app, choice),
    }
}

async fn shorten(app: &mut ShortenerApp, url: Option<String>, analytics: bool) -> Result<bool> {
    let palette = Palette {
        theme: app.state().theme(),
    };

    let url = match url {
        Some(url) => url,
        None => Input::<String>::new()
            .with_prompt("Enter your long URL here...")
            .allow_empty(true)
            .interact_text()?,
    };

    println!("{}", palette.muted("Shortening..."));
    let notification = app.submit(&url).await;
    palette.notify(&notification);

    let Some(result) = app.current().cloned() else {
        return Ok(false);
    };

    println!();
    println!("Your shortened URL:");
    println!("  {}", palette.accent(&result.short_url));
    println!();

    if analytics {
        return show_analytics(app, None).await;
    }

    Ok(true)
}

async fn show_analytics(app: &mut ShortenerApp, target: Option<String>) -> Result<bool> {
    let palette = Palette {
        theme: app.state().theme(),
    };

    let notification = match target {
        Some(target) => app.view_analytics_for(&target).await,
        None => app.view_analytics().await,
    };
    palette.notify(&notification);

    let Some(total_clicks) = app.analytics.value().copied() else {
        return Ok(false);
    };

    println!();
    println!("Total Clicks");
    println!("  {}", palette.accent(&total_clicks.to_string()));
    println!();

    Ok(true)
}

fn show_history(app: &ShortenerApp) {
    let palette = Palette {
        theme: app.state().theme(),
    };

    let recent = app.state().recent();
    if recent.is_empty() {
        println!("{}", palette.muted("No recent conversions"));
        return;
    }

    println!("{}", palette.accent("Recent conversions"));
    println!();

    for conversion in recent {
        println!(
            "  {}  {}",
            palette.accent(&conversion.short_url),
            conversion.original_url
        );
        println!(
            "  {}",
            palette.muted(&conversion.created_at.format("%Y-%m-%d %H:%M").to_string())
        );
    }

    println!();
}

fn set_theme(app: &mut ShortenerApp, choice: Option<ThemeChoice>) -> Result<bool> {
    let current = app.state().theme();

    let next = match choice {
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Toggle) => current.toggled(),
        None => {
            println!("{}", theme_name(current));
            return Ok(true);
        }
    };

    app.state_mut().set_theme(next);
    app.save()?;

    let palette = Palette { theme: next };
    println!("Theme set to {}", palette.accent(theme_name(next)));

    Ok(true)
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
