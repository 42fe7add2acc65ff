use futures::channel::mpsc::UnboundedSender;
use schafkopf_protocol::ClientToServer;

use crate::scene::ElementId;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("not connected to a server")]
    Disconnected,
    #[error("{0:?} is not part of the current interface")]
    StaleElement(ElementId),
}

/// Where outbound commands go. Sends are fire-and-forget: there is no
/// acknowledgement and nothing is retried.
pub trait ActionSink {
    fn send(&mut self, cmd: ClientToServer) -> Result<(), SendError>;
}

impl ActionSink for UnboundedSender<ClientToServer> {
    fn send(&mut self, cmd: ClientToServer) -> Result<(), SendError> {
        self.unbounded_send(cmd).map_err(|_| SendError::Disconnected)
    }
}

/// `None` while no connection is open.
impl<S: ActionSink> ActionSink for Option<S> {
    fn send(&mut self, cmd: ClientToServer) -> Result<(), SendError> {
        match self {
            Some(sink) => sink.send(cmd),
            None => Err(SendError::Disconnected),
        }
    }
}

/// Records commands instead of sending them.
impl ActionSink for Vec<ClientToServer> {
    fn send(&mut self, cmd: ClientToServer) -> Result<(), SendError> {
        self.push(cmd);
        Ok(())
    }
}
