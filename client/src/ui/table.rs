// client/src/ui/table.rs
use std::time::Duration;

use iced::{Alignment, Element, Length};
use iced_widget::{column, container, row, text, Space};
use schafkopf_protocol::Seat;

use crate::messages::Msg;
use schafkopf_client::scene::{Interface, PreviousTrickGroup, SeatPanel, TrickCard, TrickRegion};
use crate::ui::cards::{card_face, empty_slot, CardSize};
use crate::ui::theme::{felt, plate, GOLD, TEXT};

/// The table seen from seat 0: the viewer sits at the bottom, the others
/// follow clockwise (left, across, right). Every seat keeps its spot for
/// the whole game.
pub fn table_view(interface: &Interface, elapsed: Duration) -> Element<'static, Msg> {
    let [bottom, left, top, right] = Seat::ALL;
    let (current, previous) = match &interface.trick {
        TrickRegion::Trick { current, previous } => (Some(current), previous.as_ref()),
        TrickRegion::NoTrick => (None, None),
    };
    let cell = |seat: Seat| {
        seat_cell(
            &interface.panel.seats[seat.index()],
            current.and_then(|c| c.slot(seat)),
            elapsed,
        )
    };

    let layout = column![
        row![Space::with_width(Length::Fill), cell(top), Space::with_width(Length::Fill)],
        row![
            cell(left),
            Space::with_width(Length::Fill),
            previous_trick_view(previous, elapsed),
            Space::with_width(Length::Fill),
            cell(right),
        ]
        .align_y(Alignment::Center),
        row![Space::with_width(Length::Fill), cell(bottom), Space::with_width(Length::Fill)],
    ]
    .spacing(16)
    .padding(20);

    container(layout).width(Length::Fill).style(|_| felt()).into()
}

fn seat_cell(panel: &SeatPanel, slot: Option<&TrickCard>, elapsed: Duration) -> Element<'static, Msg> {
    let card = match slot {
        Some(trick_card) => card_face(
            trick_card.card,
            CardSize::Large,
            trick_card.transition.highlight(elapsed),
        ),
        None => empty_slot(CardSize::Large),
    };
    column![seat_label(panel), card]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}

fn seat_label(panel: &SeatPanel) -> Element<'static, Msg> {
    let under_timeout = panel.under_timeout;
    let (label, color) = if under_timeout {
        (format!("● {}", panel.text), GOLD)
    } else {
        (panel.text.clone(), TEXT)
    };
    container(
        text(label)
            .size(14)
            .style(move |_theme| iced_widget::text::Style {
                color: Some(color),
                ..Default::default()
            }),
    )
    .padding([4, 10])
    .style(move |_| {
        let mut style = plate();
        if under_timeout {
            style.border.color = GOLD;
            style.border.width = 2.0;
        }
        style
    })
    .into()
}

fn previous_trick_view(previous: Option<&PreviousTrickGroup>, elapsed: Duration) -> Element<'static, Msg> {
    let Some(prev) = previous else {
        return Space::new(Length::Fixed(140.0), Length::Fixed(200.0)).into();
    };
    let highlight = prev.transition.highlight(elapsed);
    let [bottom, left, top, right] = Seat::ALL;
    let small = |seat: Seat| card_face(prev.cards[seat.index()], CardSize::Small, highlight);

    column![
        text(format!("last trick, won by seat {}", prev.tag)).size(12),
        small(top),
        row![small(left), Space::with_width(Length::Fixed(8.0)), small(right)],
        small(bottom),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}
