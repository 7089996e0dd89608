//! The player's basket

use super::rect::Rect;
use crate::consts::*;

/// Horizontally movable basket resting near the floor
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    /// Left edge
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Basket {
    /// Basket centered on a playfield of the given width
    pub fn new(screen_width: f32, width: f32, height: f32, y: f32) -> Self {
        let mut basket = Self {
            x: 0.0,
            y,
            width,
            height,
        };
        basket.update(screen_width / 2.0, screen_width);
        basket
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center the basket on `target_x`, clamped to `[0, screen_width - width]`
    ///
    /// No smoothing: the basket tracks the pointer exactly.
    pub fn update(&mut self, target_x: f32, screen_width: f32) {
        let max_x = (screen_width - self.width).max(0.0);
        let x = target_x - self.width / 2.0;
        // NaN targets park the basket at the left edge
        self.x = if x.is_nan() { 0.0 } else { x.clamp(0.0, max_x) };
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new(800.0, BASKET_WIDTH, BASKET_HEIGHT, BASKET_Y)
    }
}
