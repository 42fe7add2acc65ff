//! The reconciled interface: one value per screen region.
//!
//! Front-ends only draw what is in here. Every region is replaced as a
//! whole on each pass; nothing is patched in place.

use std::time::Duration;

use schafkopf_protocol::{most_recent_seat, ActionToken, Card, Seat, SEAT_COUNT};

/// Length of the entrance animation for a freshly played card.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter(Duration),
    Still,
}

impl Transition {
    pub fn enter_if(b: bool) -> Self {
        if b {
            Transition::Enter(ENTRANCE_DURATION)
        } else {
            Transition::Still
        }
    }

    pub fn is_enter(self) -> bool {
        matches!(self, Transition::Enter(_))
    }

    /// Highlight strength `elapsed` after the pass that produced it: 1.0
    /// when the entrance starts, fading to 0.0 once it is over.
    pub fn highlight(self, elapsed: Duration) -> f32 {
        match self {
            Transition::Enter(duration) if !duration.is_zero() => {
                (1.0 - elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Addresses an interactive element of the current interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Hand(usize),
    Choice(usize),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interface {
    pub hand: HandRegion,
    pub prompt: PromptRegion,
    pub trick: TrickRegion,
    pub panel: PanelRegion,
    /// Informational line from the server, shown when no question is asked.
    pub status: Option<String>,
}

impl Interface {
    pub fn action(&self, id: ElementId) -> Option<&ActionToken> {
        match id {
            ElementId::Hand(i) => self.hand.cards.get(i).map(|card| &card.action),
            ElementId::Choice(i) => match &self.prompt {
                PromptRegion::Visible { choices, .. } => choices.get(i).map(|choice| &choice.action),
                PromptRegion::Hidden => None,
            },
        }
    }

    /// Every element that can be activated, in display order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &ActionToken)> {
        let hand = self
            .hand
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| (ElementId::Hand(i), &card.action));
        let choices: &[ChoiceButton] = match &self.prompt {
            PromptRegion::Visible { choices, .. } => choices,
            PromptRegion::Hidden => &[],
        };
        hand.chain(
            choices
                .iter()
                .enumerate()
                .map(|(i, choice)| (ElementId::Choice(i), &choice.action)),
        )
    }

    pub fn is_animating(&self) -> bool {
        match &self.trick {
            TrickRegion::NoTrick => false,
            TrickRegion::Trick { current, previous } => {
                current.slots.iter().flatten().any(|slot| slot.transition.is_enter())
                    || previous.as_ref().is_some_and(|prev| prev.transition.is_enter())
            }
        }
    }
}

/// ---- Hand ----
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandRegion {
    pub cards: Vec<HandCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandCard {
    pub card: Card,
    pub action: ActionToken,
}

/// ---- Prompt ----
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PromptRegion {
    /// The region keeps its place in the layout but shows nothing.
    #[default]
    Hidden,
    Visible {
        question: String,
        choices: Vec<ChoiceButton>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceButton {
    pub caption: String,
    pub action: ActionToken,
}

/// ---- Tricks ----
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrickRegion {
    #[default]
    NoTrick,
    Trick {
        current: CurrentTrickGroup,
        previous: Option<PreviousTrickGroup>,
    },
}

/// Cards of the trick in progress, indexed by absolute seat.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTrickGroup {
    pub lead: Seat,
    pub slots: [Option<TrickCard>; SEAT_COUNT],
}

impl CurrentTrickGroup {
    pub fn slot(&self, seat: Seat) -> Option<&TrickCard> {
        self.slots[seat.index()].as_ref()
    }

    pub fn card_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// The seat whose card plays the entrance transition.
    pub fn animated_seat(&self) -> Option<Seat> {
        most_recent_seat(self.lead, self.card_count())
            .filter(|seat| self.slot(*seat).is_some_and(|slot| slot.transition.is_enter()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrickCard {
    pub card: Card,
    pub transition: Transition,
}

/// The last completed trick. `tag` is the seat that won it, which is the
/// seat leading the current trick; it only selects the group's placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousTrickGroup {
    pub tag: Seat,
    pub cards: [Card; SEAT_COUNT],
    pub transition: Transition,
}

/// ---- Player panel ----
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelRegion {
    pub seats: [SeatPanel; SEAT_COUNT],
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeatPanel {
    pub text: String,
    pub under_timeout: bool,
}
