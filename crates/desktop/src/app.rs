use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length, Subscription, Task, Theme};

use myturn_core::analysis::domain::analysis_result::AnalysisResult;
use myturn_core::capture::domain::audio_payload::AudioPayload;
use myturn_core::history::infrastructure::bundled_dataset;
use myturn_core::shared::constants::AUDIO_EXTENSIONS;

use crate::settings::Settings;
use crate::tabs;
use crate::tabs::home_tab::HomeState;
use crate::theme;
use crate::widgets::welcome_overlay;
use crate::workers::playback;
use crate::workers::record_worker::{self, RecordCommand, RecordEvent, RecordHandle};
use crate::workers::upload_worker::{self, UploadMessage};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const COUNTER_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Info,
    Overview,
    Result,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Info, Tab::Overview, Tab::Result];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Info => "Info",
            Tab::Overview => "Overview",
            Tab::Result => "Result",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    DismissWelcome,
    StartRecording,
    StopRecording,
    PlayTake,
    UploadTake,
    SelectFile,
    FileSelected(Option<PathBuf>),
    FileDropped(PathBuf),
    DropZoneHover(bool),
    OpenLink(&'static str),
    Poll,
    CounterTick,
}

pub struct App {
    settings: Settings,
    active_tab: Tab,
    show_welcome: bool,
    recording: Option<RecordHandle>,
    recording_seconds: f64,
    last_take: Option<AudioPayload>,
    capture_error: Option<String>,
    upload: Option<Receiver<UploadMessage>>,
    result: Option<AnalysisResult>,
    drop_zone_hovered: bool,
    counter_shown: usize,
    counter_done: bool,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        // Write defaults back so the endpoint can be edited on disk.
        settings.save();

        (
            Self {
                settings,
                active_tab: Tab::Home,
                show_welcome: true,
                recording: None,
                recording_seconds: 0.0,
                last_take: None,
                capture_error: None,
                upload: None,
                result: None,
                drop_zone_hovered: false,
                counter_shown: 0,
                counter_done: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                if tab == Tab::Overview {
                    // The meeting counter counts up from zero on every visit.
                    self.counter_shown = 0;
                    self.counter_done = false;
                }
            }
            Message::DismissWelcome => self.show_welcome = false,
            Message::StartRecording => {
                if self.recording.is_none() && self.upload.is_none() {
                    self.capture_error = None;
                    self.last_take = None;
                    self.recording_seconds = 0.0;
                    self.recording = Some(record_worker::spawn());
                }
            }
            Message::StopRecording => {
                if let Some(handle) = &self.recording {
                    let _ = handle.commands.send(RecordCommand::Stop);
                }
            }
            Message::PlayTake => {
                if let Some(take) = &self.last_take {
                    playback::play(take.bytes().to_vec());
                }
            }
            Message::UploadTake => {
                if let Some(take) = self.last_take.clone() {
                    self.begin_upload(take);
                }
            }
            Message::SelectFile => {
                if self.upload.is_none() {
                    return Task::perform(
                        async {
                            rfd::AsyncFileDialog::new()
                                .set_title("Select an audio file")
                                .add_filter("Audio Files", AUDIO_EXTENSIONS)
                                .pick_file()
                                .await
                                .map(|file| file.path().to_path_buf())
                        },
                        Message::FileSelected,
                    );
                }
            }
            Message::FileSelected(Some(path)) | Message::FileDropped(path) => {
                self.submit_path(&path);
            }
            Message::FileSelected(None) => {}
            Message::DropZoneHover(hovered) => self.drop_zone_hovered = hovered,
            Message::OpenLink(url) => {
                if let Err(e) = open::that(url) {
                    log::warn!("failed to open {url}: {e}");
                }
            }
            Message::Poll => self.poll_workers(),
            Message::CounterTick => {
                let total = bundled_dataset::dataset().len();
                let step = (total / 40).max(1);
                self.counter_shown = (self.counter_shown + step).min(total);
                if self.counter_shown >= total {
                    self.counter_done = true;
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        if self.upload.is_some() {
            return self.loading_view(fs);
        }

        let theme = self.theme();
        let accent = theme.palette().primary;

        let brand = text("MyTurn")
            .size(scaled(20.0, fs))
            .color(accent)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            });

        let mut tab_bar = row![brand, Space::new().width(24)]
            .spacing(2)
            .align_y(iced::Alignment::Center);
        for tab in Tab::ALL {
            let style = if tab == self.active_tab {
                button::primary
            } else {
                button::text
            };
            tab_bar = tab_bar.push(
                button(text(tab.label()).size(scaled(14.0, fs)))
                    .on_press(Message::TabSelected(tab))
                    .padding([8, 18])
                    .style(style),
            );
        }

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Home => tabs::home_tab::view(
                fs,
                HomeState {
                    recording: self.recording.is_some(),
                    recording_seconds: self.recording_seconds,
                    take: self.last_take.as_ref(),
                    capture_error: self.capture_error.as_deref(),
                    drop_zone_hovered: self.drop_zone_hovered,
                },
                &theme,
            ),
            Tab::Info => tabs::info_tab::view(fs, &theme),
            Tab::Overview => tabs::overview_tab::view(fs, self.counter_shown, &theme),
            Tab::Result => tabs::result_tab::view(fs, self.result.as_ref(), &theme),
        };

        let footer = container(
            text("\u{00A9} 2025 MyTurn. All rights reserved.")
                .size(scaled(11.0, fs))
                .color(theme::muted_color()),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([6, 0]);

        let page = column![
            container(tab_bar).padding([10, 16]),
            container(scrollable(content).height(Length::Fill))
                .padding(16)
                .height(Length::Fill),
            footer,
        ]
        .height(Length::Fill);

        if self.show_welcome && self.active_tab == Tab::Home {
            iced::widget::stack![page, welcome_overlay::view(fs)].into()
        } else {
            page.into()
        }
    }

    pub fn theme(&self) -> Theme {
        theme::myturn_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![iced::event::listen_with(handle_event)];

        if self.recording.is_some() || self.upload.is_some() {
            subs.push(iced::time::every(POLL_INTERVAL).map(|_| Message::Poll));
        }
        if self.active_tab == Tab::Overview && !self.counter_done {
            subs.push(iced::time::every(COUNTER_INTERVAL).map(|_| Message::CounterTick));
        }

        Subscription::batch(subs)
    }

    fn loading_view(&self, fs: f32) -> Element<'_, Message> {
        let accent = self.theme().palette().primary;

        container(
            column![
                text("Processing audio, please wait\u{2026}")
                    .size(scaled(22.0, fs))
                    .color(accent),
                Space::new().height(10),
                text("Long meetings can take a while to analyze.")
                    .size(scaled(14.0, fs))
                    .color(theme::muted_color()),
            ]
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn submit_path(&mut self, path: &std::path::Path) {
        if self.upload.is_some() {
            return;
        }
        match AudioPayload::from_file(path) {
            Ok(payload) => self.begin_upload(payload),
            Err(e) => self.capture_error = Some(e.to_string()),
        }
    }

    fn begin_upload(&mut self, payload: AudioPayload) {
        if self.upload.is_some() {
            return;
        }
        self.capture_error = None;
        self.upload = Some(upload_worker::spawn(self.settings.endpoint.clone(), payload));
    }

    fn poll_workers(&mut self) {
        let mut recording_finished = false;
        if let Some(handle) = &self.recording {
            while let Ok(event) = handle.events.try_recv() {
                match event {
                    RecordEvent::Progress(seconds) => self.recording_seconds = seconds,
                    RecordEvent::Finished(payload) => {
                        self.last_take = Some(payload);
                        recording_finished = true;
                    }
                    RecordEvent::Error(message) => {
                        self.capture_error = Some(message);
                        recording_finished = true;
                    }
                }
            }
        }
        if recording_finished {
            self.recording = None;
        }

        let mut completed = None;
        if let Some(rx) = &self.upload {
            if let Ok(UploadMessage::Complete(result)) = rx.try_recv() {
                completed = Some(result);
            }
        }
        if let Some(result) = completed {
            self.upload = None;
            self.result = Some(result);
            self.active_tab = Tab::Result;
        }
    }
}

/// Scale a base font size by the configured factor, rounded to whole pixels.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}

fn handle_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn test_welcome_shows_once_until_dismissed() {
        let mut app = app();
        assert!(app.show_welcome);
        let _ = app.update(Message::DismissWelcome);
        assert!(!app.show_welcome);
        let _ = app.update(Message::TabSelected(Tab::Info));
        let _ = app.update(Message::TabSelected(Tab::Home));
        assert!(!app.show_welcome);
    }

    #[test]
    fn test_counter_restarts_on_each_overview_visit() {
        let mut app = app();
        let _ = app.update(Message::TabSelected(Tab::Overview));
        for _ in 0..100 {
            let _ = app.update(Message::CounterTick);
        }
        assert!(app.counter_done);
        assert_eq!(
            app.counter_shown,
            myturn_core::history::infrastructure::bundled_dataset::dataset().len()
        );

        let _ = app.update(Message::TabSelected(Tab::Home));
        let _ = app.update(Message::TabSelected(Tab::Overview));
        assert_eq!(app.counter_shown, 0);
        assert!(!app.counter_done);
    }

    #[test]
    fn test_counter_never_overshoots_total() {
        let mut app = app();
        let total = myturn_core::history::infrastructure::bundled_dataset::dataset().len();
        for _ in 0..1000 {
            let _ = app.update(Message::CounterTick);
            assert!(app.counter_shown <= total);
        }
    }

    #[test]
    fn test_drop_of_non_audio_file_sets_error() {
        let mut app = app();
        let _ = app.update(Message::FileDropped(PathBuf::from("notes.txt")));
        assert!(app.capture_error.is_some());
        assert!(app.upload.is_none());
    }

    #[test]
    fn test_upload_take_without_take_is_noop() {
        let mut app = app();
        let _ = app.update(Message::UploadTake);
        assert!(app.upload.is_none());
    }

    #[test]
    fn test_stop_without_recording_is_noop() {
        let mut app = app();
        let _ = app.update(Message::StopRecording);
        assert!(app.recording.is_none());
    }
}
