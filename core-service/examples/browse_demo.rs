//! Book browser demonstration
//!
//! Loads a small inline catalog, runs a title search and pages through it.
//!
//! Run with:
//! ```bash
//! # Every book, two per page
//! cargo run -p core-service --example browse_demo
//!
//! # Title search in JSON log format
//! cargo run -p core-service --example browse_demo -- json "the"
//! ```

use core_library::{JsonCatalogSource, QueryForm};
use core_runtime::logging::{LogFormat, LogLevel, LoggingConfig};
use core_runtime::BrowserConfig;
use core_service::bootstrap;
use std::env;
use tracing::info;

const CATALOG: &str = r#"{
    "books": [
        {"id": "1", "title": "The Hobbit", "author": "tolkien", "genres": ["fantasy"],
         "image": "https://covers.example/1.jpg", "description": "There and back again.",
         "published": "1937-09-21T00:00:00Z"},
        {"id": "2", "title": "Dune", "author": "herbert", "genres": ["scifi"],
         "image": "https://covers.example/2.jpg", "description": "Spice and sand.",
         "published": "1965-08-01T00:00:00Z"},
        {"id": "3", "title": "The Silmarillion", "author": "tolkien", "genres": ["fantasy"],
         "image": "https://covers.example/3.jpg", "description": "The elder days.",
         "published": "1977-09-15T00:00:00Z"},
        {"id": "4", "title": "The Dispossessed", "author": "le-guin", "genres": ["scifi"],
         "image": "https://covers.example/4.jpg", "description": "An ambiguous utopia.",
         "published": "1974-05-01T00:00:00Z"},
        {"id": "5", "title": "Earthsea", "author": "le-guin", "genres": ["fantasy"],
         "image": "https://covers.example/5.jpg", "description": "A wizard's shadow.",
         "published": "1968-01-01T00:00:00Z"}
    ],
    "authors": {"tolkien": "J.R.R. Tolkien", "herbert": "Frank Herbert", "le-guin": "Ursula K. Le Guin"},
    "genres": {"fantasy": "Fantasy", "scifi": "Science Fiction"}
}"#;

fn main() -> core_service::Result<()> {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };
    let title = args.get(2).cloned();

    let config = BrowserConfig::builder()
        .page_size(2)
        .logging(LoggingConfig::default().with_format(format).with_level(LogLevel::Debug))
        .build()?;

    let mut browser = bootstrap(config, &JsonCatalogSource::inline(CATALOG))?;

    let mut view = browser.submit(QueryForm {
        title,
        ..QueryForm::default()
    });
    if view.status.is_empty {
        info!("No results found. Your filters might be too narrow.");
        return Ok(());
    }

    loop {
        for card in &view.items {
            info!(id = %card.id, title = %card.title, author = %card.author_name, "card");
        }
        if !view.status.can_reveal_more {
            break;
        }
        info!("{}", view.status.label());
        view = browser.reveal_more();
    }

    if let Some(detail) = browser.select("1") {
        info!(title = %detail.title, subtitle = %detail.subtitle, "detail");
    }

    Ok(())
}
