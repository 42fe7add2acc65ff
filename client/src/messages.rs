use iced::futures::channel::mpsc::UnboundedSender;
use schafkopf_protocol::{ActionToken, ClientToServer};

#[derive(Debug, Clone)]
pub enum Msg {
    NameChanged(String),
    ConfirmName,

    WsConnected(UnboundedSender<ClientToServer>),
    WsFrame(String),
    WsError(String),
    Reconnect,

    /// Carries the token of the clicked element, so a snapshot that lands
    /// before the click is handled cannot change what gets sent.
    Activate(ActionToken),

    // Drives entrance animations
    Tick,
    ToggleLog,
}
