use iced::border::Radius;
use iced::{Alignment, Border, Color, Element, Length};
use iced_widget::{column, container, text, Space};
use schafkopf_protocol::{Card, Suit};

use crate::messages::Msg;
use crate::ui::theme::{mix, CARD_EDGE, CARD_FACE, FELT_DARK, GOLD};

#[derive(Copy, Clone)]
pub enum CardSize { Small, Large }

fn card_px(size: CardSize) -> (f32, f32) {
    match size {
        CardSize::Small => (44.0, 64.0),
        CardSize::Large => (70.0, 104.0),
    }
}

pub fn suit_color(suit: Suit) -> Color {
    match suit {
        Suit::Eichel => Color::from_rgb(0.45, 0.28, 0.10),
        Suit::Gras => Color::from_rgb(0.10, 0.50, 0.20),
        Suit::Herz => Color::from_rgb(0.80, 0.10, 0.15),
        Suit::Schelln => Color::from_rgb(0.85, 0.55, 0.05),
    }
}

/// A card face. `highlight` in `0.0..=1.0` pulls the border towards gold,
/// which is how a freshly played card enters the table.
pub fn card_face(card: Card, size: CardSize, highlight: f32) -> Element<'static, Msg> {
    let (w, h) = card_px(size);
    let (rank_size, suit_size) = match size {
        CardSize::Small => (18.0, 10.0),
        CardSize::Large => (30.0, 13.0),
    };
    let color = suit_color(card.suit);
    let ink = move |_theme: &iced::Theme| iced_widget::text::Style {
        color: Some(color),
        ..Default::default()
    };

    container(
        column![
            text(card.rank.label()).size(rank_size).style(ink),
            text(card.suit.to_string()).size(suit_size).style(ink),
        ]
        .align_x(Alignment::Center)
        .spacing(2),
    )
    .center_x(Length::Fixed(w))
    .center_y(Length::Fixed(h))
    .style(move |_theme| iced_widget::container::Style {
        background: Some(iced::Background::Color(CARD_FACE)),
        border: Border {
            color: mix(CARD_EDGE, GOLD, highlight),
            width: 1.0 + 3.0 * highlight,
            radius: Radius::from(6.0),
        },
        ..Default::default()
    })
    .into()
}

/// Where a card will land once its seat has played.
pub fn empty_slot(size: CardSize) -> Element<'static, Msg> {
    let (w, h) = card_px(size);
    container(Space::new(Length::Fixed(w), Length::Fixed(h)))
        .style(|_theme| iced_widget::container::Style {
            border: Border {
                color: FELT_DARK,
                width: 2.0,
                radius: Radius::from(6.0),
            },
            ..Default::default()
        })
        .into()
}
