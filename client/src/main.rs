// client/src/main.rs
mod app;
mod messages;
mod ui;

use app::App;
use clap::Parser;
use iced::Task;
use schafkopf_client::{telemetry, ClientConfig};

#[derive(Parser, Debug)]
#[command(name = "schafkopf-client", about = "Schafkopf table client")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let url = cli.config.server_url()?.to_string();
    let name = cli.config.player_name().transpose()?;
    tracing::info!(%url, name = name.as_deref().unwrap_or("<prompt>"), "starting client");

    iced::application("Schafkopf", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| iced::Theme::Dark)
        .window_size(iced::Size::new(960.0, 820.0))
        .run_with(move || (App::new(url, name), Task::none()))?;
    Ok(())
}
