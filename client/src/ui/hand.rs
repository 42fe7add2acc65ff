use iced::border::Radius;
use iced::{Border, Color, Element, Length};
use iced_widget::{button, container, row, text};

use crate::messages::Msg;
use schafkopf_client::scene::HandRegion;
use crate::ui::cards::{card_face, CardSize};
use crate::ui::theme::GOLD;

/// The viewer's playable cards. Clicking one sends its action.
pub fn hand_view(hand: &HandRegion) -> Element<'static, Msg> {
    if hand.cards.is_empty() {
        return container(text("—").size(18)).center_x(Length::Fill).into();
    }
    let mut r = row![].spacing(6);
    for hand_card in &hand.cards {
        r = r.push(
            button(card_face(hand_card.card, CardSize::Large, 0.0))
                .padding(2)
                .on_press(Msg::Activate(hand_card.action.clone()))
                .style(|_theme, status| {
                    let border_color = match status {
                        iced_widget::button::Status::Hovered | iced_widget::button::Status::Pressed => GOLD,
                        _ => Color::TRANSPARENT,
                    };
                    iced_widget::button::Style {
                        background: None,
                        border: Border {
                            color: border_color,
                            width: 2.0,
                            radius: Radius::from(8.0),
                        },
                        ..Default::default()
                    }
                }),
        );
    }
    container(r).center_x(Length::Fill).into()
}
