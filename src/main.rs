use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_desk::client::WttrClient;
use weather_desk::config::{Cli, Command, Settings};
use weather_desk::desk::{Desk, POLL_INTERVAL};
use weather_desk::service::WeatherDesk;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Desk);

    // The desk owns the terminal, so only errors reach stderr by default
    let default_filter = match command {
        Command::Desk => "weather_desk=error",
        Command::Serve => "weather_desk=info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match command {
        Command::Desk => run_desk(&cli.settings).await?,
        Command::Serve => {
            tracing::info!("Starting MCP weather server");
            let weather = WeatherDesk::new(&cli.settings)?;
            let server = weather.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            tracing::info!("Server shutdown complete");
        }
    }

    Ok(())
}

async fn run_desk(settings: &Settings) -> Result<()> {
    let client = WttrClient::new(settings)?;

    // Restore the terminal if anything panics while it is in raw mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = Desk::new(settings)
        .run(&mut terminal, client, |_| {
            if event::poll(POLL_INTERVAL)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
        .await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
