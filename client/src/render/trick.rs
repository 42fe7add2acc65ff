//! Current and previous trick.
//!
//! Cards are placed by absolute seat, not by play order, so a seat's card
//! stays in the same spot on the table from one trick to the next.

use schafkopf_protocol::{
    most_recent_seat, seat_at, CurrentTrick, PreviousTrick, StateSnapshot, Tricks, SEAT_COUNT,
};

use crate::scene::{CurrentTrickGroup, PreviousTrickGroup, TrickCard, TrickRegion, Transition};

pub fn render(snapshot: &StateSnapshot) -> TrickRegion {
    match &snapshot.tricks {
        Tricks::NoTrick => TrickRegion::NoTrick,
        Tricks::Trick { current, previous } => TrickRegion::Trick {
            current: current_group(current),
            previous: previous.as_ref().map(|prev| previous_group(current, prev)),
        },
    }
}

fn current_group(current: &CurrentTrick) -> CurrentTrickGroup {
    let animated = most_recent_seat(current.lead, current.cards.len());
    let mut slots = [None; SEAT_COUNT];
    for (offset, &card) in current.cards.iter().enumerate().take(SEAT_COUNT) {
        let seat = seat_at(current.lead, offset);
        slots[seat.index()] = Some(TrickCard {
            card,
            transition: Transition::enter_if(Some(seat) == animated),
        });
    }
    CurrentTrickGroup {
        lead: current.lead,
        slots,
    }
}

/// The previous trick only animates right after it was completed, i.e.
/// while the new trick is still empty. Later passes during the same trick
/// must not replay it.
fn previous_group(current: &CurrentTrick, previous: &PreviousTrick) -> PreviousTrickGroup {
    PreviousTrickGroup {
        tag: current.lead,
        cards: previous.cards,
        transition: Transition::enter_if(current.cards.is_empty()),
    }
}
