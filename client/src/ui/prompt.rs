use iced::{Alignment, Element, Length};
use iced_widget::{button, column, container, row, text, Space};

use crate::messages::Msg;
use schafkopf_client::scene::PromptRegion;
use crate::ui::theme::plate;

/// Height reserved for the prompt whether or not it is shown, so the hand
/// below does not jump when a question appears.
pub const PROMPT_HEIGHT: f32 = 96.0;

fn choice_button(label: String, msg: Msg) -> iced::widget::Button<'static, Msg> {
    let color = iced::Color::from_rgb(0.2, 0.6, 0.8);
    button(
        text(label)
            .size(16)
            .style(move |_theme| iced_widget::text::Style {
                color: Some(iced::Color::WHITE),
                ..Default::default()
            })
    )
    .padding([10, 18])
    .on_press(msg)
    .style(move |_theme, status| {
        let bg_color = match status {
            iced_widget::button::Status::Hovered => iced::Color {
                r: (color.r * 1.2).min(1.0),
                g: (color.g * 1.2).min(1.0),
                b: (color.b * 1.2).min(1.0),
                a: 1.0,
            },
            iced_widget::button::Status::Pressed => iced::Color {
                r: color.r * 0.8,
                g: color.g * 0.8,
                b: color.b * 0.8,
                a: 1.0,
            },
            _ => color,
        };
        iced_widget::button::Style {
            background: Some(iced::Background::Color(bg_color)),
            text_color: iced::Color::WHITE,
            border: iced::Border {
                color: iced::Color::from_rgb(0.6, 0.6, 0.6),
                width: 1.0,
                radius: iced::border::Radius::from(8.0),
            },
            ..Default::default()
        }
    })
}

pub fn prompt_view(prompt: &PromptRegion) -> Element<'static, Msg> {
    match prompt {
        PromptRegion::Hidden => Space::with_height(Length::Fixed(PROMPT_HEIGHT)).into(),
        PromptRegion::Visible { question, choices } => {
            let buttons = row(choices.iter().map(|choice| -> Element<'static, Msg> {
                choice_button(choice.caption.clone(), Msg::Activate(choice.action.clone())).into()
            }))
            .spacing(10);
            container(
                column![text(question.clone()).size(18), buttons]
                    .spacing(10)
                    .align_x(Alignment::Center),
            )
            .padding(10)
            .center_x(Length::Fill)
            .height(Length::Fixed(PROMPT_HEIGHT))
            .style(|_| plate())
            .into()
        }
    }
}
