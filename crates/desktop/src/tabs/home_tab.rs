use iced::border::Border;
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Color, Element, Length, Theme};

use myturn_core::capture::domain::audio_payload::AudioPayload;

use crate::app::{scaled, Message};
use crate::theme::{muted_color, surface_color, well_color};
use crate::widgets::dashed_container::{dashed_container, DashedBorderStyle};

pub struct HomeState<'a> {
    pub recording: bool,
    pub recording_seconds: f64,
    pub take: Option<&'a AudioPayload>,
    pub capture_error: Option<&'a str>,
    pub drop_zone_hovered: bool,
}

pub fn view<'a>(fs: f32, state: HomeState<'a>, theme: &Theme) -> Element<'a, Message> {
    let palette = theme.extended_palette();
    let accent = palette.primary.base.color;
    let danger = palette.danger.base.color;

    let mut col = column![
        text("Turning up the voices that go unheard")
            .size(scaled(26.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(16),
    ]
    .align_x(iced::Alignment::Center);

    if let Some(error) = state.capture_error {
        col = col
            .push(error_banner(fs, error, danger))
            .push(Space::new().height(12));
    }

    col = col.push(
        row![
            record_card(fs, &state, accent).width(Length::FillPortion(1)),
            drop_card(fs, state.drop_zone_hovered, accent, theme).width(Length::FillPortion(1)),
        ]
        .spacing(16),
    );

    col.into()
}

fn record_card<'a>(
    fs: f32,
    state: &HomeState<'a>,
    accent: Color,
) -> iced::widget::Container<'a, Message> {
    let mut inner = column![
        text("\u{1F399} Record with Mic")
            .size(scaled(18.0, fs))
            .color(accent),
        Space::new().height(12),
    ]
    .align_x(iced::Alignment::Center);

    if state.recording {
        inner = inner
            .push(
                text(format!("Recording\u{2026} {:.0}s", state.recording_seconds))
                    .size(scaled(14.0, fs))
                    .color(muted_color()),
            )
            .push(Space::new().height(10))
            .push(
                button(text("Stop Recording").size(scaled(15.0, fs)))
                    .on_press(Message::StopRecording)
                    .padding([10, 24])
                    .style(button::danger),
            );
    } else {
        inner = inner.push(
            button(text("Start Recording").size(scaled(15.0, fs)))
                .on_press(Message::StartRecording)
                .padding([10, 24]),
        );

        if let Some(take) = state.take {
            inner = inner
                .push(Space::new().height(14))
                .push(
                    text(format!("{} ready", take.source_name()))
                        .size(scaled(13.0, fs))
                        .color(muted_color()),
                )
                .push(Space::new().height(8))
                .push(
                    row![
                        button(text("\u{25B6} Play").size(scaled(14.0, fs)))
                            .on_press(Message::PlayTake)
                            .padding([8, 16])
                            .style(button::secondary),
                        button(text("Upload & Analyze").size(scaled(14.0, fs)))
                            .on_press(Message::UploadTake)
                            .padding([8, 16])
                            .style(button::success),
                    ]
                    .spacing(10),
                );
        }
    }

    card(inner.into())
}

fn drop_card<'a>(
    fs: f32,
    hovered: bool,
    accent: Color,
    theme: &Theme,
) -> iced::widget::Container<'a, Message> {
    let palette = theme.extended_palette();

    let base_style = DashedBorderStyle {
        border_color: Color {
            a: 0.35,
            ..accent
        },
        border_width: 2.0,
        dash_length: 5.0,
        gap_length: 4.0,
        corner_radius: 12.0,
        background: well_color(),
    };
    let hover_style = DashedBorderStyle {
        border_color: accent,
        background: Color {
            a: 0.10,
            ..accent
        },
        ..base_style
    };

    let inner = column![
        text("\u{2B06}").size(scaled(22.0, fs)).color(accent),
        Space::new().height(8),
        text("Drop an audio file here")
            .size(scaled(16.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(4),
        text("or click to browse")
            .size(scaled(13.0, fs))
            .color(muted_color()),
        Space::new().height(14),
        button(text("Browse Files").size(scaled(14.0, fs)))
            .on_press(Message::SelectFile)
            .padding([8, 20]),
        Space::new().height(10),
        text("WAV, MP3, M4A, OGG, FLAC")
            .size(scaled(11.0, fs))
            .color(muted_color()),
    ]
    .align_x(iced::Alignment::Center);

    let zone = dashed_container(base_style, [28, 20], inner).hover_style(hover_style, hovered);

    let zone = mouse_area(zone)
        .on_press(Message::SelectFile)
        .on_enter(Message::DropZoneHover(true))
        .on_exit(Message::DropZoneHover(false));

    let header = text("\u{1F4E4} Drag & Drop Upload")
        .size(scaled(18.0, fs))
        .color(palette.primary.base.color);

    card(
        column![header, Space::new().height(12), zone]
            .align_x(iced::Alignment::Center)
            .into(),
    )
}

fn error_banner<'a>(fs: f32, error: &'a str, danger: Color) -> Element<'a, Message> {
    container(
        text(error)
            .size(scaled(14.0, fs))
            .color(danger),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color { a: 0.12, ..danger })),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn card(content: Element<'_, Message>) -> iced::widget::Container<'_, Message> {
    container(content)
        .padding(24)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface_color())),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
}
