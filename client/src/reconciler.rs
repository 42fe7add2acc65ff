use schafkopf_protocol::{decode, ActionToken, ClientToServer, DecodeError, StateSnapshot};
use tracing::{debug, info, warn};

use crate::render;
use crate::scene::{ElementId, Interface};
use crate::sink::{ActionSink, SendError};

/// Owns the visible interface and the outbound transport of one session.
///
/// Each snapshot replaces every region wholesale. A snapshot that fails to
/// decode leaves the interface exactly as it was.
pub struct Reconciler<S> {
    sink: S,
    interface: Interface,
    passes: u64,
}

impl<S: ActionSink> Reconciler<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            interface: Interface::default(),
            passes: 0,
        }
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Number of snapshots applied so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Swap the transport, e.g. after a reconnect. The interface is kept
    /// until the next snapshot arrives.
    pub fn replace_sink(&mut self, sink: S) -> S {
        std::mem::replace(&mut self.sink, sink)
    }

    /// Decode one text frame and, if it is valid, rebuild the interface.
    pub fn reconcile(&mut self, text: &str) -> Result<&Interface, DecodeError> {
        let snapshot = decode(text).map_err(|e| {
            warn!(error = %e, pass = self.passes, "discarding undecodable snapshot");
            e
        })?;
        Ok(self.apply(&snapshot))
    }

    pub fn apply(&mut self, snapshot: &StateSnapshot) -> &Interface {
        let next = Interface {
            hand: render::hand::render(snapshot),
            prompt: render::prompt::render(snapshot),
            trick: render::trick::render(snapshot),
            panel: render::panel::render(snapshot),
            status: render::prompt::render_status(snapshot),
        };
        self.interface = next;
        self.passes += 1;
        debug!(
            pass = self.passes,
            hand = self.interface.hand.cards.len(),
            elements = self.interface.elements().count(),
            "snapshot applied"
        );
        &self.interface
    }

    pub fn login(&mut self, name: &str) -> Result<(), SendError> {
        info!(%name, "logging in");
        self.sink.send(ClientToServer::PlayerLogin {
            name: name.to_string(),
        })
    }

    /// Send the action behind an element of the current interface.
    pub fn activate(&mut self, id: ElementId) -> Result<(), SendError> {
        let action = self
            .interface
            .action(id)
            .cloned()
            .ok_or(SendError::StaleElement(id))?;
        self.send_action(action)
    }

    pub fn send_action(&mut self, action: ActionToken) -> Result<(), SendError> {
        info!(%action, "sending action");
        self.sink.send(ClientToServer::GamePhaseAction(action))
    }
}
