//! WikiDesk: desktop Wikipedia reader
//!
//! Search Wikipedia, preview snippets, read an article with its thumbnail,
//! and save it as PDF, plain text or DOCX.
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=wikidesk=debug`.

mod app;
mod backend;
mod controller;
mod dialogs;
mod export;
mod preferences;
mod ui;

use app::WikiDesk;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("Starting WikiDesk {}", env!("CARGO_PKG_VERSION"));

    iced::application("Wikipedia Scraper App", WikiDesk::update, WikiDesk::view)
        .subscription(WikiDesk::subscription)
        .theme(WikiDesk::theme)
        .window(window::Settings {
            size: Size::new(880.0, 850.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
