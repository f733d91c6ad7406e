use engine::graphics::Color;
use engine::view_tree::{CircleNode, ViewNode, ViewTree};

use crate::settings::{TARGET_GROWTH_RATE, TARGET_MAX_SIZE, TargetSettings};

/// Ring radii as fractions of the current size, outermost first.
const RING_FRACTIONS: [f64; 4] = [1.0, 0.8, 0.6, 0.4];

/// A clickable disc that grows to its maximum size once, then shrinks until it
/// disappears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    pub size: f64,
    pub grow: bool,
    /// Net growth steps taken; `size` is always `steps * growth_rate`.
    steps: u32,
    max_size: f64,
    growth_rate: f64,
}

/// Relative slack on `max_size` when checking whether the next step reaches it.
const REACH_TOLERANCE: f64 = 1e-9;

impl Target {
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_growth(x, y, TARGET_MAX_SIZE, TARGET_GROWTH_RATE)
    }

    pub fn from_settings(x: i32, y: i32, settings: &TargetSettings) -> Self {
        Self::with_growth(x, y, settings.max_size, settings.growth_rate)
    }

    pub fn with_growth(x: i32, y: i32, max_size: f64, growth_rate: f64) -> Self {
        Self {
            x,
            y,
            size: 0.0,
            grow: true,
            steps: 0,
            max_size,
            growth_rate,
        }
    }

    /// Advances the animation by one frame.
    ///
    /// Growth stops for good on the frame where another step would reach the maximum;
    /// that frame already shrinks.
    pub fn update(&mut self) {
        let next = f64::from(self.steps.saturating_add(1)) * self.growth_rate;
        if next >= self.max_size * (1.0 - REACH_TOLERANCE) {
            self.grow = false;
        }

        self.steps = if self.grow {
            self.steps.saturating_add(1)
        } else {
            self.steps.saturating_sub(1)
        };
        self.size = f64::from(self.steps) * self.growth_rate;
    }

    /// True when `(px, py)` lies within the current radius (boundary included).
    pub fn collide(&self, px: i32, py: i32) -> bool {
        let dx = f64::from(self.x) - f64::from(px);
        let dy = f64::from(self.y) - f64::from(py);
        (dx * dx + dy * dy).sqrt() <= self.size
    }

    pub fn is_expired(&self) -> bool {
        self.size <= 0.0
    }

    pub fn draw(&self, view: &mut ViewTree, primary: Color, secondary: Color) {
        for (i, fraction) in RING_FRACTIONS.into_iter().enumerate() {
            let color = if i % 2 == 0 { primary } else { secondary };
            view.push(ViewNode::Circle(CircleNode {
                center: (self.x, self.y),
                radius: (self.size * fraction) as f32,
                color,
            }));
        }
    }
}
