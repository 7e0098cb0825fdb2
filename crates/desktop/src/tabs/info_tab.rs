use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Theme};

use crate::app::{scaled, Message};
use crate::theme::muted_color;

const RESOURCES: &[(&str, &str)] = &[
    (
        "Catalyst: Why women speak less in meetings",
        "https://www.catalyst.org/research/why-women-speak-less-in-meetings/",
    ),
    (
        "Harvard Business Review: Women, find your voice",
        "https://hbr.org/2014/06/women-find-your-voice",
    ),
    (
        "BBC Worklife: The tyranny of the meeting talker",
        "https://www.bbc.com/worklife/article/20201201-the-people-who-talk-too-much-in-meetings",
    ),
    (
        "George Washington University: Men interrupt women more",
        "https://www.advancingwomeninscience.org/men-interrupt-women",
    ),
];

pub fn view(fs: f32, theme: &Theme) -> Element<'static, Message> {
    let accent = theme.extended_palette().primary.base.color;

    let mut col = column![
        text("Why MyTurn?").size(scaled(24.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(12),
        text(
            "Research consistently shows that women get less speaking time in \
             mixed meetings and are interrupted more often. Most teams never \
             notice, because nobody is counting. MyTurn counts.",
        )
        .size(scaled(15.0, fs)),
        Space::new().height(8),
        text(
            "Record a meeting or upload an existing recording. MyTurn \
             transcribes it, estimates the speaker's gender for each line, and \
             shows who held the floor and for how long. Use the numbers to \
             start a conversation, not to point fingers.",
        )
        .size(scaled(15.0, fs)),
        Space::new().height(20),
        text("Further reading")
            .size(scaled(18.0, fs))
            .color(accent),
        Space::new().height(6),
    ]
    .max_width(720);

    for &(title, url) in RESOURCES {
        col = col.push(
            button(text(title).size(scaled(14.0, fs)).color(accent))
                .on_press(Message::OpenLink(url))
                .style(button::text)
                .padding([4, 0]),
        );
    }

    col = col.push(Space::new().height(16)).push(
        text("Questions or feedback? Ask the team that runs your MyTurn server.")
            .size(scaled(12.0, fs))
            .color(muted_color()),
    );

    container(col)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
