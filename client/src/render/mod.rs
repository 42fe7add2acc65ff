//! Pure projections from a snapshot onto one interface region each.
//!
//! None of these look at the previous interface, so rendering the same
//! snapshot twice yields equal regions.

pub mod hand;
pub mod panel;
pub mod prompt;
pub mod trick;

#[cfg(test)]
pub(crate) fn empty_snapshot() -> schafkopf_protocol::StateSnapshot {
    use schafkopf_protocol::{Message, StateSnapshot, Tricks};
    StateSnapshot {
        hand_actions: vec![],
        message: Message::Info(String::new()),
        tricks: Tricks::NoTrick,
        seat_labels: ["Anna".into(), "Bert".into(), "Carl".into(), "Dora".into()],
        active_rule: None,
        timeout_seat: None,
    }
}
