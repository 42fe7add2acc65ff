use futures::channel::mpsc;
use iced::futures::{SinkExt, StreamExt};
use iced::Subscription;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use schafkopf_protocol::ClientToServer;

use crate::messages::Msg;

/// Connects to the server and keeps the socket open for as long as the
/// subscription lives. A new `attempt` number starts a fresh connection.
pub fn subscription(url: String, attempt: u32) -> Subscription<Msg> {
    let id = format!("ws:{url}:{attempt}");
    let stream = iced::stream::channel(100, move |mut output| async move {
        match connect_async(url.as_str()).await {
            Ok((mut ws, _)) => {
                tracing::info!(%url, "websocket connected");
                let (tx_out, mut rx_out) = mpsc::unbounded::<ClientToServer>();
                let _ = output.send(Msg::WsConnected(tx_out)).await;

                let reason = loop {
                    tokio::select! {
                        Some(cmd) = rx_out.next() => {
                            match serde_json::to_string(&cmd) {
                                Ok(json) => {
                                    if let Err(e) = ws.send(Message::Text(json)).await {
                                        break format!("send: {e}");
                                    }
                                }
                                Err(e) => tracing::warn!(error = %e, "could not encode command"),
                            }
                        }
                        frame = ws.next() => match frame {
                            Some(Ok(Message::Text(text))) => {
                                let _ = output.send(Msg::WsFrame(text)).await;
                            }
                            Some(Ok(Message::Close(_))) | None => break "socket closed".to_string(),
                            Some(Ok(_)) => {}
                            Some(Err(e)) => break format!("receive: {e}"),
                        },
                    }
                };
                tracing::info!(%url, %reason, "websocket disconnected");
                let _ = output.send(Msg::WsError(reason)).await;
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "websocket connect failed");
                let _ = output.send(Msg::WsError(format!("connect: {e}"))).await;
            }
        }
    });
    Subscription::run_with_id(id, stream)
}
