use iced::border::Border;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use crate::app::{scaled, Message};
use crate::theme::surface_color;

/// First-visit overlay shown once per run on the Home tab.
pub fn view(fs: f32) -> Element<'static, Message> {
    let close = button(text("\u{00D7}").size(scaled(20.0, fs)))
        .on_press(Message::DismissWelcome)
        .style(button::text)
        .padding([2, 8]);

    let card = container(
        column![
            row![Space::new().width(Length::Fill), close],
            text("Hey there!").size(scaled(24.0, fs)).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
            Space::new().height(10),
            text(
                "We are MyTurn, a tool that records audio during meetings to \
                 measure how much men and women speak, and whether one group \
                 tends to dominate the conversation.",
            )
            .size(scaled(15.0, fs)),
            Space::new().height(8),
            text(
                "Recordings are only used for analysis. No one outside your \
                 team will hear them.",
            )
            .size(scaled(15.0, fs)),
        ]
        .align_x(iced::Alignment::Center)
        .spacing(0),
    )
    .padding(24)
    .width(440)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(surface_color())),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    // Dim everything behind the card.
    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.55,
                ..Color::BLACK
            })),
            ..container::Style::default()
        })
        .into()
}
