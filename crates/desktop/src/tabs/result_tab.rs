use iced::border::Border;
use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Color, Element, Length, Theme};

use myturn_core::analysis::domain::analysis_result::{AnalysisResult, SpeakingStats};
use myturn_core::analysis::domain::gender::Gender;

use crate::app::{scaled, Message};
use crate::theme::{female_color, male_color, muted_color, surface_color, unknown_color, well_color};
use crate::widgets::pie_chart::{pie_chart, Slice};

pub fn view<'a>(fs: f32, result: Option<&'a AnalysisResult>, theme: &Theme) -> Element<'a, Message> {
    match result {
        None => placeholder(fs),
        Some(AnalysisResult::Failed(message)) => error_panel(fs, message, theme),
        Some(AnalysisResult::Analysis(stats)) => stats_panel(fs, stats, theme),
    }
}

fn placeholder(fs: f32) -> Element<'static, Message> {
    container(
        column![
            text("No analysis yet").size(scaled(20.0, fs)),
            Space::new().height(8),
            text("Record a meeting or upload an audio file on the Home tab.")
                .size(scaled(14.0, fs))
                .color(muted_color()),
        ]
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(40)
    .into()
}

fn error_panel<'a>(fs: f32, message: &'a str, theme: &Theme) -> Element<'a, Message> {
    let danger = theme.extended_palette().danger.base.color;

    container(
        column![
            text("Error").size(scaled(20.0, fs)).color(danger),
            Space::new().height(10),
            text(message).size(scaled(15.0, fs)),
        ]
        .align_x(iced::Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color { a: 0.10, ..danger })),
        border: Border {
            radius: 16.0.into(),
            color: danger,
            width: 1.0,
        },
        ..container::Style::default()
    })
    .into()
}

fn stats_panel<'a>(fs: f32, stats: &'a SpeakingStats, theme: &Theme) -> Element<'a, Message> {
    let accent = theme.extended_palette().primary.base.color;

    let ratio_card = card(
        column![
            text("Speaking time (%)").size(scaled(16.0, fs)).color(accent),
            Space::new().height(10),
            pie_chart(
                vec![
                    Slice {
                        value: stats.male_percent(),
                        color: male_color(),
                    },
                    Slice {
                        value: stats.female_percent(),
                        color: female_color(),
                    },
                ],
                surface_color(),
                140.0,
            ),
            Space::new().height(10),
            text(format!("Male {}%", stats.male_percent_label()))
                .size(scaled(14.0, fs))
                .color(male_color()),
            text(format!("Female {}%", stats.female_percent_label()))
                .size(scaled(14.0, fs))
                .color(female_color()),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    );

    let seconds_card = card(
        column![
            text("Speaking time (seconds)")
                .size(scaled(16.0, fs))
                .color(accent),
            Space::new().height(10),
            text(format!("Male: {:.1}s", stats.male_seconds))
                .size(scaled(14.0, fs))
                .color(male_color()),
            text(format!("Female: {:.1}s", stats.female_seconds))
                .size(scaled(14.0, fs))
                .color(female_color()),
            Space::new().height(6),
            text(format!("Total: {:.1}s", stats.total_seconds)).size(scaled(14.0, fs)),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    );

    let mut lines = column![].spacing(6);
    for (line, gender) in stats.transcript_lines() {
        let bg = match gender {
            Gender::Female => female_color(),
            Gender::Male | Gender::Unknown => unknown_color(),
        };
        lines = lines.push(
            container(
                text(line)
                    .size(scaled(14.0, fs))
                    .color(Color::BLACK),
            )
            .padding([8, 12])
            .width(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(bg)),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }),
        );
    }

    let transcript: Element<'a, Message> = if stats.transcript.is_empty() {
        text("The service returned no transcript for this recording.")
            .size(scaled(14.0, fs))
            .color(muted_color())
            .into()
    } else {
        scrollable(lines).height(Length::Fill).into()
    };

    let transcript_card = container(
        column![
            text("Transcript").size(scaled(16.0, fs)).color(accent),
            Space::new().height(10),
            container(transcript)
                .padding(12)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(well_color())),
                    border: Border {
                        radius: 10.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }),
        ],
    )
    .padding(20)
    .height(420)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(surface_color())),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    row![
        column![ratio_card, seconds_card]
            .spacing(16)
            .width(Length::FillPortion(1)),
        container(transcript_card).width(Length::FillPortion(2)),
    ]
    .spacing(16)
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
