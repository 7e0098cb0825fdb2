use iced::border::Border;
use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use myturn_core::history::domain::overview_stats::OverviewStats;
use myturn_core::history::infrastructure::bundled_dataset;

use crate::app::{scaled, Message};
use crate::theme::{female_color, male_color, muted_color, surface_color};
use crate::widgets::line_chart::{line_chart, Series};
use crate::widgets::pie_chart::{pie_chart, Slice};

pub fn view(fs: f32, counter_shown: usize, theme: &Theme) -> Element<'static, Message> {
    let accent = theme.extended_palette().primary.base.color;
    let records = bundled_dataset::dataset();
    let stats = OverviewStats::from_records(records);

    let x_labels = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first.date.to_string(), last.date.to_string()),
        _ => (String::new(), String::new()),
    };
    let chart = line_chart(
        vec![
            Series {
                color: male_color(),
                points: records.iter().map(|r| r.male).collect(),
            },
            Series {
                color: female_color(),
                points: records.iter().map(|r| r.female).collect(),
            },
        ],
        x_labels,
        240.0,
    );

    let trend_card = card(
        column![
            text("Speaking time over past meetings")
                .size(scaled(18.0, fs))
                .color(accent),
            Space::new().height(10),
            chart,
            Space::new().height(6),
            row![
                legend_dot(male_color()),
                text("Male").size(scaled(13.0, fs)),
                Space::new().width(14),
                legend_dot(female_color()),
                text("Female").size(scaled(13.0, fs)),
            ]
            .spacing(6)
            .align_y(iced::Alignment::Center),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    );

    let average_card = card(
        column![
            text("Average split").size(scaled(18.0, fs)).color(accent),
            Space::new().height(10),
            pie_chart(
                vec![
                    Slice {
                        value: stats.average_male,
                        color: male_color(),
                    },
                    Slice {
                        value: stats.average_female,
                        color: female_color(),
                    },
                ],
                surface_color(),
                150.0,
            ),
            Space::new().height(10),
            text(format!("Male {}%", stats.average_male_label()))
                .size(scaled(14.0, fs))
                .color(male_color()),
            text(format!("Female {}%", stats.average_female_label()))
                .size(scaled(14.0, fs))
                .color(female_color()),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    );

    let counter_card = card(
        column![
            text("Meetings analyzed").size(scaled(18.0, fs)).color(accent),
            Space::new().height(14),
            container(
                text(counter_shown.to_string())
                    .size(scaled(30.0, fs))
                    .font(iced::Font {
                        weight: iced::font::Weight::Bold,
                        ..iced::Font::DEFAULT
                    }),
            )
            .width(92)
            .height(92)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(Color { a: 0.18, ..accent })),
                border: Border {
                    radius: 46.0.into(),
                    color: accent,
                    width: 2.0,
                },
                ..container::Style::default()
            }),
            Space::new().height(14),
            text("meetings measured so far")
                .size(scaled(13.0, fs))
                .color(muted_color()),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    );

    column![
        trend_card,
        row![
            container(average_card).width(Length::FillPortion(1)),
            container(counter_card).width(Length::FillPortion(1)),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .into()
}

fn legend_dot(color: Color) -> Element<'static, Message> {
    container(Space::new().width(10).height(10))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(color)),
            border: Border {
                radius: 5.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn card(content: Element<'static, Message>) -> iced::widget::Container<'static, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface_color())),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
}
