//! Desktop weather lookup using egui/eframe.
//!
//! This crate focuses on:
//! - Loading credentials (`.env`, environment, optional config file)
//! - Wiring the background fetch worker to the window
//! - Drawing the search field, history selector and result labels

use std::sync::Arc;

use eframe::{NativeOptions, egui};
use weather_core::{Config, FetchWorker, UnconfiguredProvider, WeatherProvider, config::API_KEY_ENV};

use crate::app::WeatherApp;

mod action;
mod app;
mod controller;
mod ui;

fn main() -> anyhow::Result<()> {
    // before the subscriber so RUST_LOG may come from .env as well
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => tracing::debug!("no .env file"),
        Err(err) => tracing::warn!("ignoring unreadable .env: {err}"),
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("{err:#}; using defaults");
        let mut config = Config::default();
        config.apply_env_api_key(std::env::var(API_KEY_ENV).ok());
        config
    });

    let provider = match weather_core::provider_from_config(&config) {
        Ok(provider) => provider,
        Err(err) => {
            tracing::warn!("{err:#}");
            Arc::new(UnconfiguredProvider) as Arc<dyn WeatherProvider>
        }
    };

    let worker = FetchWorker::new(provider)?;
    let country_code = config.country_code.clone();

    tracing::info!(country = %country_code, "starting weather window");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Weather App",
        options,
        Box::new(move |cc| Ok(Box::new(WeatherApp::new(cc, worker, country_code)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run the window: {err}"))
}
