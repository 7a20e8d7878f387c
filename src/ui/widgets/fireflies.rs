//! Decorative drifting fireflies.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const SYMBOLS: [&str; 3] = ["·", "•", "∙"];
const STEP: f32 = 0.02;

#[derive(Debug, Clone, PartialEq)]
struct Firefly {
    x: f32,
    y: f32,
    glow: usize,
}

/// Positions of the fireflies in unit coordinates.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fireflies {
    flies: Vec<Firefly>,
}

impl Fireflies {
    /// Scatter `count` fireflies at random positions.
    ///
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        Fireflies {
            flies: (0..count)
                .map(|_| Firefly {
                    x: rng.gen_range(0.0..1.0),
                    y: rng.gen_range(0.0..1.0),
                    glow: rng.gen_range(0..SYMBOLS.len()),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flies.is_empty()
    }

    /// Drift every firefly a little, wrapping at the edges.
    ///
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        for fly in self.flies.iter_mut() {
            fly.x = (fly.x + rng.gen_range(-STEP..STEP)).rem_euclid(1.0);
            fly.y = (fly.y + rng.gen_range(-STEP..STEP)).rem_euclid(1.0);
            fly.glow = (fly.glow + 1) % SYMBOLS.len();
        }
    }

    /// Map every firefly into cells of the area.
    ///
    pub fn cells(&self, area: Rect) -> Vec<(u16, u16, &'static str)> {
        if area.width == 0 || area.height == 0 {
            return vec![];
        }
        self.flies
            .iter()
            .map(|fly| {
                let x = area.x + ((fly.x * area.width as f32) as u16).min(area.width - 1);
                let y = area.y + ((fly.y * area.height as f32) as u16).min(area.height - 1);
                (x, y, SYMBOLS[fly.glow])
            })
            .collect()
    }

    /// Return a widget drawing the fireflies in the given color.
    ///
    pub fn widget(&self, color: Color) -> FirefliesWidget<'_> {
        FirefliesWidget {
            fireflies: self,
            color,
        }
    }
}

/// Widget drawing fireflies over whatever is already in the buffer.
///
pub struct FirefliesWidget<'a> {
    fireflies: &'a Fireflies,
    color: Color,
}

impl<'a> Widget for FirefliesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (x, y, symbol) in self.fireflies.cells(area) {
            buf.get_mut(x, y).set_symbol(symbol).set_fg(self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fireflies_stay_inside_area() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut fireflies = Fireflies::new(25, &mut rng);
        let area = Rect::new(2, 3, 40, 10);
        for _ in 0..50 {
            fireflies.step(&mut rng);
            for (x, y, _) in fireflies.cells(area) {
                assert!(x >= area.x && x < area.x + area.width);
                assert!(y >= area.y && y < area.y + area.height);
            }
        }
        assert_eq!(fireflies.len(), 25);
    }

    #[test]
    fn empty_area_has_no_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        let fireflies = Fireflies::new(5, &mut rng);
        assert!(fireflies.cells(Rect::new(0, 0, 0, 5)).is_empty());
    }

    #[test]
    fn widget_draws_symbols() {
        let mut rng = StdRng::seed_from_u64(3);
        let fireflies = Fireflies::new(1, &mut rng);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        fireflies.widget(Color::Yellow).render(area, &mut buf);
        let (x, y, symbol) = fireflies.cells(area)[0];
        assert_eq!(buf.get(x, y).symbol(), symbol);
    }
}
