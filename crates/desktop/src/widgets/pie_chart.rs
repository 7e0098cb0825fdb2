use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{Color, Element, Length, Radians, Rectangle, Renderer, Theme};

use crate::theme;

/// One wedge of the proportion chart.
#[derive(Debug, Clone, Copy)]
pub struct Slice {
    pub value: f64,
    pub color: Color,
}

/// Donut-style proportion chart with a 70% cutout.
pub struct PieChart {
    slices: Vec<Slice>,
    cutout: f32,
    hole_color: Color,
}

pub fn pie_chart<Message: 'static>(
    slices: Vec<Slice>,
    hole_color: Color,
    diameter: f32,
) -> Element<'static, Message> {
    Canvas::new(PieChart {
        slices,
        cutout: 0.7,
        hole_color,
    })
    .width(Length::Fixed(diameter))
    .height(Length::Fixed(diameter))
    .into()
}

impl<Message> canvas::Program<Message> for PieChart {
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
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - 2.0;

        let total: f64 = self.slices.iter().map(|s| s.value.max(0.0)).sum();
        if total > 0.0 {
            // Start at 12 o'clock, sweep clockwise.
            let mut start = -std::f32::consts::FRAC_PI_2;
            for slice in &self.slices {
                let sweep = (slice.value.max(0.0) / total) as f32 * std::f32::consts::TAU;
                if sweep <= 0.0 {
                    continue;
                }
                let wedge = Path::new(|b| {
                    b.move_to(center);
                    b.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + sweep),
                    });
                    b.close();
                });
                frame.fill(&wedge, slice.color);
                start += sweep;
            }
        } else {
            frame.fill(&Path::circle(center, radius), theme::muted_color());
        }

        if self.cutout > 0.0 {
            frame.fill(&Path::circle(center, radius * self.cutout), self.hole_color);
        }

        vec![frame.into_geometry()]
    }
}
