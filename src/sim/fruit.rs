//! Falling fruit entities

use glam::Vec2;

use super::rect::Rect;

/// Fruit kinds, each with a fixed point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    /// Apple, 10 points
    Common,
    /// Grape, 5 points
    Rare,
    /// Watermelon, 15 points
    Bonus,
}

impl FruitKind {
    /// Kinds in spawn-roll order (roll 0, 1, 2)
    pub const ALL: [FruitKind; 3] = [FruitKind::Common, FruitKind::Rare, FruitKind::Bonus];

    pub fn points(&self) -> u32 {
        match self {
            FruitKind::Common => 10,
            FruitKind::Rare => 5,
            FruitKind::Bonus => 15,
        }
    }

    /// Sprite the renderer should draw for this kind
    pub fn sprite(&self) -> Sprite {
        match self {
            FruitKind::Common => Sprite("apple"),
            FruitKind::Rare => Sprite("grape"),
            FruitKind::Bonus => Sprite("watermelon"),
        }
    }

    pub fn from_roll(roll: usize) -> Self {
        match roll {
            1 => FruitKind::Rare,
            2 => FruitKind::Bonus,
            _ => FruitKind::Common,
        }
    }
}

/// Opaque rendering handle; the simulation never reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite(pub &'static str);

impl Sprite {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// A single fruit in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: u32,
    /// Bottom-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    kind: FruitKind,
    pub sprite: Sprite,
}

impl Fruit {
    /// `size` must be positive in both axes
    pub fn new(id: u32, pos: Vec2, size: Vec2, vel: Vec2, kind: FruitKind) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "fruit size must be positive");
        Self {
            id,
            pos,
            vel,
            size,
            kind,
            sprite: kind.sprite(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn kind(&self) -> FruitKind {
        self.kind
    }

    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Advance one step: gravity first, then position
    pub fn update(&mut self, dt: f32, gravity: f32) {
        self.vel.y -= gravity * dt;
        self.pos += self.vel * dt;
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}
