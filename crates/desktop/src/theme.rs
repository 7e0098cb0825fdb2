use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// The fixed MyTurn palette: deep indigo background, violet accent.
pub fn myturn_theme() -> Theme {
    Theme::custom(
        "MyTurn",
        Palette {
            background: color!(0x1f, 0x17, 0x40),
            text: color!(0xf5, 0xf3, 0xff),
            primary: color!(0xa6, 0x78, 0xff),
            success: color!(0x81, 0xc7, 0x84),
            warning: color!(0xff, 0xcc, 0x00),
            danger: color!(0xef, 0x44, 0x44),
        },
    )
}

/// Card background used by the tiled views.
pub fn surface_color() -> Color {
    color!(0x2d, 0x23, 0x60)
}

/// Darker inset panels (transcript well, drop zone).
pub fn well_color() -> Color {
    color!(0x25, 0x1a, 0x3a)
}

pub fn muted_color() -> Color {
    color!(0xb9, 0xb3, 0xd9)
}

/// Chart color for male speaking time.
pub fn male_color() -> Color {
    color!(0x4f, 0xc3, 0xf7)
}

/// Chart color for female speaking time.
pub fn female_color() -> Color {
    color!(0x81, 0xc7, 0x84)
}

/// Transcript lines without a gender label.
pub fn unknown_color() -> Color {
    color!(0xf3, 0xf4, 0xf6)
}
