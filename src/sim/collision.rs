//! Player/brick collision classification and response
//!
//! Bricks are axis-aligned boxes. A contact is either a side hit (the player
//! is pushed out horizontally and keeps falling) or a top landing (the player
//! rides the brick). The threshold separates the two near corners: a shallow
//! vertical overlap that is well inside the brick's span is a landing,
//! anything deeper is a side hit.

use super::body::Body;

/// Which side of the brick the player struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player came from the left, pushed back to the brick's left edge
    Left,
    /// Player came from the right, pushed back to the brick's right edge
    Right,
}

/// Result of resolving one player/brick pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No support from this brick; nominal fall resumes
    Clear,
    /// Deep vertical overlap. `None` when the player is horizontally clear of
    /// the brick, or sits motionless on its center line; no push is applied
    Side(Option<Side>),
    /// Player rides on top of the brick
    Landed,
}

/// Push side for a player whose span lies within the brick's span
///
/// Decided by horizontal motion, then by centers. A motionless, centered
/// player is not pushed.
fn embedded_side(player: &Body, brick: &Body) -> Option<Side> {
    let offset = player.center().x - brick.center().x;
    if player.vel.x > 0.0 || (player.vel.x == 0.0 && offset < 0.0) {
        Some(Side::Left)
    } else if player.vel.x < 0.0 || offset > 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Classify the overlap between `player` and `brick` and correct the player
///
/// `fall_speed` is the player's nominal vertical velocity. Calls for several
/// bricks in one frame overwrite each other; the last brick processed wins.
pub fn resolve(player: &mut Body, brick: &Body, threshold: f32, fall_speed: f32) -> Contact {
    let y_delta_top = player.bottom() - brick.top();
    let x_delta_left = player.right() - brick.left();
    let x_delta_right = player.left() - brick.right();

    if y_delta_top >= threshold && player.top() < brick.bottom() {
        player.vel.y = fall_speed;

        let side = if !player.rect().overlaps(&brick.rect()) {
            None
        } else if player.left() < brick.left() {
            Some(Side::Left)
        } else if player.right() > brick.right() {
            Some(Side::Right)
        } else {
            embedded_side(player, brick)
        };

        match side {
            Some(Side::Left) => player.set_right(brick.left()),
            Some(Side::Right) => player.pos.x = brick.right(),
            None => {}
        }
        if side.is_some() {
            player.vel.x = 0.0;
            player.accel.x = 0.0;
        }
        Contact::Side(side)
    } else if y_delta_top > 0.0
        && y_delta_top < threshold
        && x_delta_left > threshold
        && x_delta_right < -threshold
    {
        player.vel.y = brick.vel.y;
        player.set_bottom(brick.top());
        Contact::Landed
    } else {
        player.vel.y = fall_speed;
        Contact::Clear
    }
}
