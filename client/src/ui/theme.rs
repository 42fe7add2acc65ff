use iced::border::Radius;
use iced::{Border, Color};

pub const FELT: Color        = Color { r: 0.070, g: 0.345, b: 0.190, a: 1.0 };
pub const FELT_DARK: Color   = Color { r: 0.045, g: 0.220, b: 0.120, a: 1.0 };
pub const LIP: Color         = Color { r: 0.020, g: 0.090, b: 0.050, a: 1.0 };
pub const GOLD: Color        = Color { r: 0.980, g: 0.860, b: 0.220, a: 1.0 };
pub const TEXT: Color        = Color { r: 0.92,  g: 0.92,  b: 0.94,  a: 1.0 };
pub const INK_SOFT: Color    = Color { r: 0.14,  g: 0.14,  b: 0.16,  a: 1.0 };
pub const CARD_FACE: Color   = Color { r: 0.98,  g: 0.97,  b: 0.93,  a: 1.0 };
pub const CARD_EDGE: Color   = Color { r: 0.35,  g: 0.35,  b: 0.38,  a: 1.0 };
pub const ERROR: Color       = Color { r: 1.0,   g: 0.3,   b: 0.3,   a: 1.0 };

pub fn plate() -> iced_widget::container::Style {
    iced_widget::container::Style {
        background: Some(iced::Background::Color(INK_SOFT)),
        border: Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.50),
            width: 1.0,
            radius: Radius::from(10.0),
        },
        text_color: Some(TEXT),
        ..Default::default()
    }
}

pub fn felt() -> iced_widget::container::Style {
    iced_widget::container::Style {
        background: Some(iced::Background::Color(FELT)),
        border: Border {
            color: LIP,
            width: 6.0,
            radius: Radius::from(24.0),
        },
        text_color: Some(TEXT),
        ..Default::default()
    }
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

// handy pill
pub fn pill(label: String) -> iced::Element<'static, crate::messages::Msg> {
    use iced::Length;
    use iced_widget::{container, text};
    container(text(label).size(14))
        .padding(6.0_f32)
        .width(Length::Shrink)
        .style(|_| plate())
        .into()
}
