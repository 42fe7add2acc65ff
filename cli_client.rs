use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use futures::channel::mpsc;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use schafkopf_client::scene::{Interface, PromptRegion, TrickRegion};
use schafkopf_client::{telemetry, validate_name, ClientConfig, ElementId, Reconciler};
use schafkopf_protocol::{ClientToServer, Seat};

const LOG_LIMIT: usize = 400;

#[derive(Parser, Debug)]
#[command(name = "cli_client", about = "Schafkopf terminal client")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Activate(ElementId),
    Show,
    Log,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = Cli::parse();
    let url = cli.config.server_url()?;

    println!("🃏 Schafkopf CLI Client");
    println!("======================");

    let player_name = match cli.config.player_name() {
        Some(name) => name?,
        None => {
            print!("Name: ");
            io::stdout().flush()?;
            let mut raw = String::new();
            io::stdin().read_line(&mut raw)?;
            validate_name(&raw)?
        }
    };

    println!("🔗 Connecting to {}...", url);
    let (mut ws, _) = connect_async(url.as_str())
        .await
        .with_context(|| format!("connecting to {url}"))?;
    println!("✅ Connected to server!");

    let (tx_out, mut rx_out) = mpsc::unbounded::<ClientToServer>();
    let mut reconciler = Reconciler::new(tx_out);
    reconciler.login(&player_name)?;

    print_help();

    let mut log: Vec<String> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(cmd) = rx_out.next() => {
                if let Err(e) = send_command(&mut ws, &cmd).await {
                    println!("❌ Could not send: {:#}", e);
                    push_log(&mut log, format!("send: {e:#}"));
                    break;
                }
            }
            frame = ws.next() => match frame {
                Some(Ok(Message::Text(text))) => match reconciler.reconcile(&text) {
                    Ok(interface) => print_interface(interface),
                    Err(e) => push_log(&mut log, format!("decode: {e}")),
                },
                Some(Ok(Message::Close(_))) | None => {
                    println!("🔌 Connection closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    println!("❌ WebSocket error: {}", e);
                    push_log(&mut log, format!("receive: {e}"));
                    break;
                }
            },
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        println!("❌ Could not read input: {}", e);
                        push_log(&mut log, format!("stdin: {e}"));
                        break;
                    }
                };
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Show) => print_interface(reconciler.interface()),
                    Some(Command::Log) => {
                        for entry in &log {
                            println!("  {entry}");
                        }
                    }
                    Some(Command::Activate(id)) => {
                        if let Err(e) = reconciler.activate(id) {
                            println!("❌ {e}");
                            push_log(&mut log, format!("action: {e}"));
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => println!("❓ Unknown command: {}", line.trim()),
                }
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

async fn send_command<S>(ws: &mut S, cmd: &ClientToServer) -> anyhow::Result<()>
where
    S: futures::Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    let json = serde_json::to_string(cmd)?;
    ws.send(Message::Text(json)).await?;
    Ok(())
}

fn print_help() {
    println!("\n📋 Commands available:");
    println!("  play <n>   - Play the n-th card of your hand");
    println!("  choose <n> - Pick the n-th answer of the current question");
    println!("  show       - Print the table again");
    println!("  log        - Show errors seen so far");
    println!("  quit       - Exit the game");
    println!("\nType commands and press Enter:");
}

fn push_log(log: &mut Vec<String>, line: String) {
    tracing::debug!(%line, "client log");
    log.push(line);
    if log.len() > LOG_LIMIT {
        log.remove(0);
    }
}

fn print_interface(interface: &Interface) {
    println!("\n🎲 === TABLE ===");
    if let Some(status) = &interface.status {
        println!("ℹ️  {}", status);
    }

    println!("👥 Players:");
    for seat in Seat::all() {
        let panel = &interface.panel.seats[seat.index()];
        let timeout = if panel.under_timeout { " ⏳" } else { "" };
        println!("  {}: {}{}", seat, panel.text, timeout);
    }

    match &interface.trick {
        TrickRegion::NoTrick => println!("🂠 No trick on the table"),
        TrickRegion::Trick { current, previous } => {
            println!("🂠 Trick (led by seat {}):", current.lead);
            for seat in Seat::all() {
                let card = current
                    .slot(seat)
                    .map(|slot| slot.card.to_string())
                    .unwrap_or_else(|| "--".to_string());
                let marker = if current.animated_seat() == Some(seat) { " ✨" } else { "" };
                println!("    seat {}: {}{}", seat, card, marker);
            }
            if let Some(prev) = previous {
                let cards: Vec<String> = prev.cards.iter().map(|c| c.to_string()).collect();
                println!("  Last trick (won by seat {}): {}", prev.tag, cards.join(" "));
            }
        }
    }

    if let PromptRegion::Visible { question, choices } = &interface.prompt {
        println!("❔ {}", question);
        for (i, choice) in choices.iter().enumerate() {
            println!("    choose {}: {}", i + 1, choice.caption);
        }
    }

    if interface.hand.cards.is_empty() {
        println!("🃏 Hand: —");
    } else {
        let cards: Vec<String> = interface
            .hand
            .cards
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}:{}", i + 1, c.card))
            .collect();
        println!("🃏 Hand: {}", cards.join("  "));
    }
    println!("===============\n");
}

/// Numbers typed by the user are 1-based.
fn parse_command(input: &str) -> Option<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let index = |raw: Option<&&str>| -> Option<usize> {
        raw?.parse::<usize>().ok()?.checked_sub(1)
    };

    match parts.first()?.to_lowercase().as_str() {
        "play" | "p" => index(parts.get(1)).map(|i| Command::Activate(ElementId::Hand(i))),
        "choose" | "c" => index(parts.get(1)).map(|i| Command::Activate(ElementId::Choice(i))),
        "show" => Some(Command::Show),
        "log" => Some(Command::Log),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_and_choose_are_one_based() {
        assert_eq!(parse_command("play 1"), Some(Command::Activate(ElementId::Hand(0))));
        assert_eq!(parse_command("choose 3"), Some(Command::Activate(ElementId::Choice(2))));
        assert_eq!(parse_command("P 2"), Some(Command::Activate(ElementId::Hand(1))));
    }

    #[test]
    fn rejects_missing_or_zero_index() {
        assert_eq!(parse_command("play"), None);
        assert_eq!(parse_command("play 0"), None);
        assert_eq!(parse_command("choose x"), None);
    }

    #[test]
    fn plain_commands() {
        assert_eq!(parse_command("  quit "), Some(Command::Quit));
        assert_eq!(parse_command("log"), Some(Command::Log));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("dance"), None);
    }

    #[tokio::test]
    async fn send_command_writes_json_frame() {
        let (mut tx, mut rx) = mpsc::unbounded::<Message>();
        let mut sink = (&mut tx).sink_map_err(|_| tokio_tungstenite::tungstenite::Error::ConnectionClosed);
        let cmd = ClientToServer::PlayerLogin { name: "Anna".into() };
        send_command(&mut sink, &cmd).await.unwrap();
        assert_eq!(
            rx.next().await,
            Some(Message::Text(r#"{"PlayerLogin":{"str_player_name":"Anna"}}"#.to_string()))
        );
    }

    #[tokio::test]
    async fn send_command_failure_is_an_error_not_a_panic() {
        let (mut tx, rx) = mpsc::unbounded::<Message>();
        drop(rx);
        let mut sink = (&mut tx).sink_map_err(|_| tokio_tungstenite::tungstenite::Error::ConnectionClosed);
        let cmd = ClientToServer::PlayerLogin { name: "Anna".into() };
        assert!(send_command(&mut sink, &cmd).await.is_err());
    }

    #[test]
    fn push_log_is_bounded() {
        let mut log = Vec::new();
        for i in 0..LOG_LIMIT + 5 {
            push_log(&mut log, i.to_string());
        }
        assert_eq!(log.len(), LOG_LIMIT);
        assert_eq!(log[0], "5");
    }
}
