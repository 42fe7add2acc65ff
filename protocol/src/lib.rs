use serde::{Deserialize, Serialize};
use std::fmt;

mod card;
mod seat;
mod snapshot;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use seat::{most_recent_seat, seat_at, Seat, SeatOutOfRange, SEAT_COUNT};
pub use snapshot::{
    decode, ActiveRule, Choice, CurrentTrick, DecodeError, DisplayedCurrentTrick,
    DisplayedPreviousTrick, DisplayedTricks, HandAction, Message, PreviousTrick, Prompt,
    SiteState, StateSnapshot, TaggedMessage, Tricks, WireMessage,
};

/// ---- Action tokens ----
///
/// Identifies one legal move. Only the server knows what it means; the
/// client stores it and sends it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionToken(serde_json::Value);

impl From<serde_json::Value> for ActionToken {
    fn from(value: serde_json::Value) -> Self {
        ActionToken(value)
    }
}

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ---- Client to server ----
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientToServer {
    GamePhaseAction(ActionToken),
    PlayerLogin {
        #[serde(rename = "str_player_name")]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_is_echoed_verbatim() {
        let token: ActionToken = serde_json::from_value(json!({"Game": {"Zugeben": "GA"}})).unwrap();
        let cmd = ClientToServer::GamePhaseAction(token);
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"GamePhaseAction": {"Game": {"Zugeben": "GA"}}})
        );
    }

    #[test]
    fn test_login_shape() {
        let cmd = ClientToServer::PlayerLogin { name: "Anna".into() };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"PlayerLogin": {"str_player_name": "Anna"}})
        );
    }

    #[test]
    fn test_token_display_is_compact_json() {
        let token = ActionToken::from(json!(["DealCards", false]));
        assert_eq!(token.to_string(), r#"["DealCards",false]"#);
    }
}
