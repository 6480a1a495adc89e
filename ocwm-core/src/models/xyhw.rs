//! Rectangles in layout coordinates.
use serde::{Deserialize, Serialize};

/// Placement and size of a rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }

    pub fn set_w(&mut self, value: i32) {
        self.w = value;
    }

    pub fn set_h(&mut self, value: i32) {
        self.h = value;
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Whether the point lies inside, counting the top and left edges only.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        f64::from(self.x) <= x
            && x < f64::from(self.right())
            && f64::from(self.y) <= y
            && y < f64::from(self.bottom())
    }
}
