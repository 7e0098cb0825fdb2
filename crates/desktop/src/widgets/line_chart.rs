use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::theme;

/// One plotted series: percentage values (0-100) in x order.
#[derive(Debug, Clone)]
pub struct Series {
    pub color: Color,
    pub points: Vec<f64>,
}

/// Time-series chart with a fixed 0-100 percentage axis.
pub struct LineChart {
    series: Vec<Series>,
    x_labels: (String, String),
}

const MARGIN_LEFT: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 22.0;
const MARGIN_TOP: f32 = 8.0;
const MARGIN_RIGHT: f32 = 8.0;

pub fn line_chart<Message: 'static>(
    series: Vec<Series>,
    x_labels: (String, String),
    height: f32,
) -> Element<'static, Message> {
    Canvas::new(LineChart { series, x_labels })
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

impl<Message> canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let muted = theme::muted_color();
        let grid = Color { a: 0.25, ..muted };

        let plot_w = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

        let x_at = |i: usize, n: usize| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            MARGIN_LEFT + t * plot_w
        };
        let y_at = |pct: f64| MARGIN_TOP + plot_h * (1.0 - (pct.clamp(0.0, 100.0) as f32 / 100.0));

        // Horizontal grid at 0/25/50/75/100%.
        for step in 0..=4 {
            let pct = step as f64 * 25.0;
            let y = y_at(pct);
            let line = Path::line(
                Point::new(MARGIN_LEFT, y),
                Point::new(MARGIN_LEFT + plot_w, y),
            );
            frame.stroke(&line, Stroke::default().with_width(1.0).with_color(grid));
            frame.fill_text(canvas::Text {
                content: format!("{pct:.0}"),
                position: Point::new(4.0, y - 7.0),
                color: muted,
                size: 11.0.into(),
                ..canvas::Text::default()
            });
        }

        for series in &self.series {
            let n = series.points.len();
            if n == 0 {
                continue;
            }
            let line = Path::new(|b| {
                b.move_to(Point::new(x_at(0, n), y_at(series.points[0])));
                for (i, &pct) in series.points.iter().enumerate().skip(1) {
                    b.line_to(Point::new(x_at(i, n), y_at(pct)));
                }
            });
            frame.stroke(&line, Stroke::default().with_width(2.0).with_color(series.color));
            for (i, &pct) in series.points.iter().enumerate() {
                let dot = Path::circle(Point::new(x_at(i, n), y_at(pct)), 2.5);
                frame.fill(&dot, series.color);
            }
        }

        // First and last date only; per-point labels would not fit.
        frame.fill_text(canvas::Text {
            content: self.x_labels.0.clone(),
            position: Point::new(MARGIN_LEFT, bounds.height - 16.0),
            color: muted,
            size: 11.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: self.x_labels.1.clone(),
            position: Point::new(MARGIN_LEFT + plot_w - 64.0, bounds.height - 16.0),
            color: muted,
            size: 11.0.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
