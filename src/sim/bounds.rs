//! Playfield bounds for the player
//!
//! Horizontal and bottom edges are walls; the top edge is the loss line.

use serde::{Deserialize, Serialize};

use super::body::Body;

/// Visible drawing surface, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Outcome of clamping the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsCheck {
    InBounds,
    /// The player escaped through the top edge
    OutOfBounds,
}

/// Keep the player inside the playfield
///
/// With `escape_radius` set the loss test uses `center.y - radius` instead of
/// the top edge.
pub fn clamp_to_playfield(
    body: &mut Body,
    field: Playfield,
    escape_radius: Option<f32>,
) -> BoundsCheck {
    if body.left() < 0.0 {
        body.pos.x = 0.0;
    } else if body.right() > field.width {
        body.set_right(field.width);
    }

    let escaped = match escape_radius {
        Some(radius) => body.center().y - radius < 0.0,
        None => body.top() < 0.0,
    };

    if body.bottom() > field.height {
        body.set_bottom(field.height);
        BoundsCheck::InBounds
    } else if escaped {
        BoundsCheck::OutOfBounds
    } else {
        BoundsCheck::InBounds
    }
}
