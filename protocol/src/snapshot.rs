use serde::{Deserialize, Serialize};

use crate::seat::{Seat, SeatOutOfRange, SEAT_COUNT};
use crate::{ActionToken, Card, ParseCardError};

/// ---- Wire shape ----
///
/// The JSON object the server pushes on every state change. Field names
/// follow the server; everything is converted into [`StateSnapshot`]
/// before a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteState {
    #[serde(rename = "vectplstrstr_caption_message_zugeben")]
    pub hand_actions: Vec<(String, ActionToken)>,
    pub msg: WireMessage,
    #[serde(rename = "odisplayedstichs")]
    pub tricks: Option<DisplayedTricks>,
    #[serde(rename = "mapepistr")]
    pub seat_labels: [String; SEAT_COUNT],
    #[serde(rename = "otplepistr_rules")]
    pub active_rule: Option<(u8, String)>,
    #[serde(rename = "oepi_timeout")]
    pub timeout_seat: Option<u8>,
}

/// Either a plain status string or a tagged object. Older servers sent the
/// bare string, current ones send `{"Info": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireMessage {
    Plain(String),
    Tagged(TaggedMessage),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaggedMessage {
    Info(String),
    Ask {
        #[serde(rename = "str_question")]
        question: String,
        /// Missing and `null` both mean no choices.
        #[serde(rename = "vecstrgamephaseaction", default)]
        choices: Option<Vec<(String, ActionToken)>>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayedTricks {
    #[serde(rename = "stichcurrent")]
    pub current: DisplayedCurrentTrick,
    #[serde(rename = "ostichprev")]
    pub previous: Option<DisplayedPreviousTrick>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayedCurrentTrick {
    /// Also the seat that won the previous trick.
    #[serde(rename = "epi_first")]
    pub lead: u8,
    #[serde(rename = "vecstr_card")]
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayedPreviousTrick {
    /// Indexed by seat, not by play order.
    #[serde(rename = "mapepistr_card")]
    pub cards: [String; SEAT_COUNT],
}

/// ---- Typed snapshot ----
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub hand_actions: Vec<HandAction>,
    pub message: Message,
    pub tricks: Tricks,
    pub seat_labels: [String; SEAT_COUNT],
    pub active_rule: Option<ActiveRule>,
    pub timeout_seat: Option<Seat>,
}

/// A card the viewer may play, with the token to echo back if chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct HandAction {
    pub card: Card,
    pub action: ActionToken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Info(String),
    Ask(Prompt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub question: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub caption: String,
    pub action: ActionToken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tricks {
    NoTrick,
    Trick {
        current: CurrentTrick,
        previous: Option<PreviousTrick>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTrick {
    pub lead: Seat,
    /// Play order, starting with `lead`. Never more than [`SEAT_COUNT`].
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviousTrick {
    pub cards: [Card; SEAT_COUNT],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRule {
    pub seat: Seat,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownCard(#[from] ParseCardError),
    #[error(transparent)]
    SeatOutOfRange(#[from] SeatOutOfRange),
    #[error("current trick holds {0} cards, at most 4 allowed")]
    TrickOverflow(usize),
}

/// Decode one text frame into a snapshot. Nothing beyond field presence,
/// card tokens, seat range and trick length is checked.
pub fn decode(text: &str) -> Result<StateSnapshot, DecodeError> {
    let site_state: SiteState = serde_json::from_str(text)?;
    StateSnapshot::try_from(site_state)
}

impl TryFrom<SiteState> for StateSnapshot {
    type Error = DecodeError;

    fn try_from(site_state: SiteState) -> Result<Self, Self::Error> {
        let hand_actions = site_state
            .hand_actions
            .into_iter()
            .map(|(card, action)| -> Result<_, DecodeError> {
                Ok(HandAction {
                    card: card.parse()?,
                    action,
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;

        let tricks = match site_state.tricks {
            None => Tricks::NoTrick,
            Some(displayed) => Tricks::Trick {
                current: CurrentTrick::try_from(displayed.current)?,
                previous: displayed.previous.map(PreviousTrick::try_from).transpose()?,
            },
        };

        let active_rule = site_state
            .active_rule
            .map(|(seat, text)| -> Result<_, DecodeError> {
                Ok(ActiveRule {
                    seat: Seat::try_from(seat)?,
                    text,
                })
            })
            .transpose()?;

        Ok(StateSnapshot {
            hand_actions,
            message: site_state.msg.into(),
            tricks,
            seat_labels: site_state.seat_labels,
            active_rule,
            timeout_seat: site_state.timeout_seat.map(Seat::try_from).transpose()?,
        })
    }
}

impl From<WireMessage> for Message {
    fn from(msg: WireMessage) -> Self {
        match msg {
            WireMessage::Plain(text) | WireMessage::Tagged(TaggedMessage::Info(text)) => {
                Message::Info(text)
            }
            WireMessage::Tagged(TaggedMessage::Ask { question, choices }) => Message::Ask(Prompt {
                question,
                choices: choices
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(caption, action)| Choice { caption, action })
                    .collect(),
            }),
        }
    }
}

impl TryFrom<DisplayedCurrentTrick> for CurrentTrick {
    type Error = DecodeError;

    fn try_from(displayed: DisplayedCurrentTrick) -> Result<Self, Self::Error> {
        if displayed.cards.len() > SEAT_COUNT {
            return Err(DecodeError::TrickOverflow(displayed.cards.len()));
        }
        Ok(CurrentTrick {
            lead: Seat::try_from(displayed.lead)?,
            cards: displayed
                .cards
                .iter()
                .map(|card| card.parse::<Card>())
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl TryFrom<DisplayedPreviousTrick> for PreviousTrick {
    type Error = DecodeError;

    fn try_from(displayed: DisplayedPreviousTrick) -> Result<Self, Self::Error> {
        let [c0, c1, c2, c3] = &displayed.cards;
        Ok(PreviousTrick {
            cards: [c0.parse()?, c1.parse()?, c2.parse()?, c3.parse()?],
        })
    }
}
