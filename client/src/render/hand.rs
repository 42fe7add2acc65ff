use schafkopf_protocol::StateSnapshot;

use crate::scene::{HandCard, HandRegion};

/// Rebuild the playable cards. Cards from the previous hand are never
/// reused, even if they are unchanged.
pub fn render(snapshot: &StateSnapshot) -> HandRegion {
    HandRegion {
        cards: snapshot
            .hand_actions
            .iter()
            .map(|hand_action| HandCard {
                card: hand_action.card,
                action: hand_action.action.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::empty_snapshot;
    use schafkopf_protocol::{ActionToken, HandAction};
    use serde_json::json;

    #[test]
    fn test_one_card_per_action_in_order() {
        let mut snapshot = empty_snapshot();
        snapshot.hand_actions = vec![
            HandAction { card: "H7".parse().unwrap(), action: ActionToken::from(json!("play:H7")) },
            HandAction { card: "GA".parse().unwrap(), action: ActionToken::from(json!("play:GA")) },
        ];
        let hand = render(&snapshot);
        assert_eq!(hand.cards.len(), 2);
        assert_eq!(hand.cards[0].card.to_string(), "H7");
        assert_eq!(hand.cards[1].action, ActionToken::from(json!("play:GA")));
    }

    #[test]
    fn test_empty_actions_empty_hand() {
        assert!(render(&empty_snapshot()).cards.is_empty());
    }
}
