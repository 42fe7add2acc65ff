use iced::{Alignment, Color, Element, Length};
use iced_widget::{button, column, container, row, scrollable, text, text_input, Space};

use crate::app::App;
use crate::messages::Msg;
use crate::ui::theme::{pill, ERROR};

pub fn name_input_view<'a>(name: &'a str, name_error: &'a Option<String>) -> Element<'a, Msg> {
    let mut content = column![
        Space::with_height(Length::Fixed(100.0)),
        text("Schafkopf").size(40),
        Space::with_height(Length::Fixed(40.0)),
        text("Name:").size(24),
        text_input("Your name", name)
            .on_input(Msg::NameChanged)
            .on_submit(Msg::ConfirmName)
            .padding(10)
            .width(Length::Fixed(300.0)),
        Space::with_height(Length::Fixed(20.0)),
        button(text("Take a seat"))
            .on_press(Msg::ConfirmName)
            .padding(10)
            .width(Length::Fixed(150.0)),
    ]
    .align_x(Alignment::Center)
    .spacing(10);

    if let Some(error) = name_error {
        content = content.push(
            text(error)
                .style(|_theme| iced_widget::text::Style {
                    color: Some(ERROR),
                    ..Default::default()
                })
                .size(14)
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn header_view(app: &App) -> Element<'static, Msg> {
    let status = app
        .reconciler
        .interface()
        .status
        .clone()
        .unwrap_or_else(|| "…".to_string());

    let connection = if app.connected {
        format!("🟢 {} @ {}", app.name, app.url)
    } else {
        format!("🔴 Disconnected from {}", app.url)
    };

    let mut bar = row![
        text("Schafkopf").size(22),
        Space::with_width(Length::Fixed(12.0)),
        pill(status),
        Space::with_width(Length::Fill),
        pill(connection),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if !app.connected {
        bar = bar.push(button(text("Reconnect").size(14)).on_press(Msg::Reconnect));
    }
    bar.push(
        button(text(if app.show_log { "Hide log" } else { "Show log" }).size(14))
            .on_press(Msg::ToggleLog),
    )
    .into()
}

pub fn log_view(log: &[String]) -> Element<'_, Msg> {
    let lines = column(log.iter().rev().take(40).map(|line| -> Element<'_, Msg> {
        text(line.as_str())
            .size(12)
            .style(|_theme| iced_widget::text::Style {
                color: Some(Color::from_rgb(0.8, 0.8, 0.8)),
                ..Default::default()
            })
            .into()
    }));
    scrollable(lines).height(Length::Fixed(160.0)).into()
}
