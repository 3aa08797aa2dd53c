mod config;
mod fetch;
mod seal;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calvault_core::{SimplifiedCalendar, Window, ics, ingest};
use chrono::Utc;
use clap::Parser;

/// Pull calendar feeds and publish the upcoming week as an encrypted blob.
#[derive(Parser)]
#[command(name = "calvault")]
#[command(about = "Encrypt your upcoming calendar events for distribution")]
struct Cli {
    /// Days of upcoming events to include
    #[arg(long, default_value_t = 7)]
    days: i64,

    /// Where to write the encrypted artifact
    #[arg(short, long, default_value = "docs/cal.aes")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::Settings::load()?;
    let reference = settings.reference_zone()?;
    let window = Window::next_days(Utc::now(), cli.days);

    let mut all_events = Vec::new();
    for (i, url) in settings.feeds.iter().enumerate() {
        let body = fetch::fetch_feed(url).await?;
        let raw = ics::parse_feed(&body).with_context(|| format!("parsing feed {url}"))?;

        let summary = ingest::ingest_events(&raw, &window, reference);
        println!("Calendar {} has {} events", i, summary.event_count);
        all_events.extend(summary.events);
    }

    let calendar = SimplifiedCalendar {
        events: all_events,
        date_created: Utc::now(),
    };
    let event_count = calendar.events.len();

    let json = serde_json::to_vec(&calendar).context("serializing calendar")?;
    let blob = seal::seal(&settings.key, &json)?;
    write_artifact(&cli.output, &blob.to_bytes())?;

    println!(
        "Successfully encrypted and saved {} events to {}",
        event_count,
        cli.output.display()
    );
    Ok(())
}

/// Write to a sibling temp path and rename, so a failed run cannot leave a
/// truncated artifact behind.
fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("moving artifact to {}", path.display()))?;
    Ok(())
}
