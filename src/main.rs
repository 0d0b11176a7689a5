//! flightfare-tui - terminal booking funnel for discounted international flights
//!
//! This is the main entry point for the flightfare-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::services::{DealContextProvider, GeminiClient, OfflineProvider};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.write_default_config {
        let path = Config::default()
            .save(cli.config.as_deref())
            .context("failed to write default config")?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let log_path = logging::setup_logging(cli.log_level.as_deref());

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }
    info!(log = ?log_path, "starting flightfare-tui");

    let provider = build_provider(&config);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(config, provider);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// HTTP-backed provider, or the offline one when the client cannot be built
fn build_provider(config: &Config) -> Arc<dyn DealContextProvider> {
    match GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.api_base_url.clone(),
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "text generation unavailable, using fallback copy");
            Arc::new(OfflineProvider)
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                warn!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
