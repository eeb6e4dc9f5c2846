//! tubescrape - YouTube page metadata scraper
//!
//! Fetches a channel, playlist or watch page and prints the extracted record.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tubescrape::{Scraper, ScraperSettings, YoutubeClient};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Print records as JSON instead of the text summary
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to <config dir>/tubescrape/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the consent cookie handshake
    #[arg(long, global = true)]
    no_consent: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Channel "about" page, by UC id or @handle
    Channel { id: String },
    /// Playlist page
    Playlist { id: String },
    /// Watch page
    Video { id: String },
    /// Channel, its uploads playlist and the newest upload
    Uploads { channel: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so JSON on stdout stays clean)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(args))
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(ScraperSettings::default_path);
    let mut settings = ScraperSettings::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    if args.no_consent {
        settings.accept_consent = false;
    }

    let client = YoutubeClient::new(settings).context("Failed to build HTTP client")?;
    if client.settings().accept_consent {
        client
            .init_cookies()
            .await
            .context("Consent handshake failed")?;
    }
    let scraper = Scraper::new(Arc::new(client));

    match args.command {
        Command::Channel { id } => {
            let channel = scraper
                .channel(&id)
                .await
                .with_context(|| format!("Failed to scrape channel {}", id))?;
            print_record(&channel, args.json)?;
        }
        Command::Playlist { id } => {
            let playlist = scraper
                .playlist(&id)
                .await
                .with_context(|| format!("Failed to scrape playlist {}", id))?;
            print_record(&playlist, args.json)?;
        }
        Command::Video { id } => {
            let video = scraper
                .video(&id)
                .await
                .with_context(|| format!("Failed to scrape video {}", id))?;
            print_record(&video, args.json)?;
        }
        Command::Uploads { channel } => {
            let uploads = scraper
                .uploads(&channel)
                .await
                .with_context(|| format!("Failed to scrape uploads of {}", channel))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&uploads)?);
            } else {
                println!("{}", uploads.channel);
                println!("{}", uploads.playlist);
                match &uploads.latest {
                    Some(video) => println!("{}", video),
                    None => println!("Video: (uploads playlist is empty)"),
                }
            }
        }
    }

    Ok(())
}

fn print_record<T: Serialize + Display>(record: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record);
    }
    Ok(())
}
