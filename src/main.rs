use clap::{Parser, Subcommand};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use schafkopf_client::ClientConfig;

const TABLE_SIZE: u32 = 4;

#[derive(Parser)]
#[command(name = "schafkopf")]
#[command(about = "Schafkopf - client launcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one graphical client
    Gui {
        #[command(flatten)]
        config: ClientConfig,
    },
    /// Run the terminal client
    Cli {
        #[command(flatten)]
        config: ClientConfig,
    },
    /// Run four graphical clients against one server
    Table {
        /// Websocket address of the game server
        #[arg(long, env = "SCHAFKOPF_URL", default_value = schafkopf_client::config::DEFAULT_URL)]
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gui { config } => {
            config.server_url()?;
            run_gui(&config)
        }
        Commands::Cli { config } => {
            config.server_url()?;
            run_cli(&config)
        }
        Commands::Table { url } => {
            let config = ClientConfig { url, name: None };
            config.server_url()?;
            run_table(config);
            Ok(())
        }
    }
}

fn run_table(config: ClientConfig) {
    println!("🚀 Starting {} Schafkopf clients against {}", TABLE_SIZE, config.url);

    let mut client_handles = Vec::new();
    for i in 1..=TABLE_SIZE {
        println!("🎮 Starting client {}...", i);
        let config = config.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(500 * i as u64)); // Stagger client starts
            if let Err(e) = run_gui(&config) {
                eprintln!("❌ Client {} failed: {:#}", i, e);
            }
        });
        client_handles.push(handle);
    }

    println!("✅ All clients started. Press Ctrl+C to stop.");

    for handle in client_handles {
        let _ = handle.join();
    }
}

fn run_gui(config: &ClientConfig) -> anyhow::Result<()> {
    let mut command = Command::new("cargo");
    command.args(["run", "-p", "schafkopf-client", "--"]);
    run(command, config, "client")
}

fn run_cli(config: &ClientConfig) -> anyhow::Result<()> {
    let mut command = Command::new("cargo");
    command.args(["run", "--bin", "cli_client", "--"]);
    run(command, config, "terminal client")
}

fn run(mut command: Command, config: &ClientConfig, what: &str) -> anyhow::Result<()> {
    command.args(["--url", &config.url]);
    if let Some(name) = &config.name {
        command.args(["--name", name]);
    }

    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| anyhow::anyhow!("failed to start {what}: {e}"))?;

    if !status.success() {
        anyhow::bail!("{what} exited with error: {status}");
    }
    Ok(())
}
