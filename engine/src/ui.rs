//! Minimal UI layout primitives.
//!
//! A `Rect` type plus anchored placement, enough to lay out a status bar and
//! centre text blocks on a fixed-size window.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Places a child of `size` inside this rect using the requested `anchor`.
    ///
    /// If `size` exceeds this rect, it is clamped to fit.
    pub fn place(&self, size: Size, anchor: Anchor) -> Self {
        let w = size.w.min(self.w);
        let h = size.h.min(self.h);

        let (x, y) = match anchor {
            Anchor::TopCenter => (self.x.saturating_add(self.w.saturating_sub(w) / 2), self.y),
            Anchor::CenterLeft => (self.x, self.y.saturating_add(self.h.saturating_sub(h) / 2)),
        };

        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Centred horizontally, flush with the top edge.
    TopCenter,
    /// Flush with the left edge, centred vertically.
    CenterLeft,
}
