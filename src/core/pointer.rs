//! Normalized pointer state shared between input handlers and the frame loop.

use glam::Vec2;
use std::f32::consts::SQRT_2;

/// Pointer position in `[-1, 1]²`, origin at the surface center, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance from center normalized so the corners map to 1.
    #[inline]
    pub fn proximity(self) -> f32 {
        ((self.x * self.x + self.y * self.y).sqrt() / SQRT_2).min(1.0)
    }
}

/// Bounding rectangle of the interactive surface in client (CSS pixel) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map client coordinates to a [`PointerState`].
///
/// Returns `None` for a degenerate (zero or negative sized) surface.
#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, rect: SurfaceRect) -> Option<PointerState> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let x = ((client_x - rect.left) / rect.width) * 2.0 - 1.0;
    let y = -((client_y - rect.top) / rect.height) * 2.0 + 1.0;
    (x.is_finite() && y.is_finite()).then(|| PointerState::new(x, y))
}

/// Latest pointer sample plus its derived proximity scalar.
///
/// Written by event handlers, read once per frame as a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    pub state: PointerState,
    pub proximity: f32,
}

impl Default for PointerTracker {
    // No cursor seen yet: centered pose, but treated as far away.
    fn default() -> Self {
        Self {
            state: PointerState::CENTER,
            proximity: 1.0,
        }
    }
}

impl PointerTracker {
    pub fn set(&mut self, state: PointerState) {
        self.state = state;
        self.proximity = state.proximity();
    }

    /// Apply a client-space sample; degenerate surfaces leave the tracker untouched.
    pub fn set_client(&mut self, client_x: f32, client_y: f32, rect: SurfaceRect) -> bool {
        match normalize_client(client_x, client_y, rect) {
            Some(state) => {
                self.set(state);
                true
            }
            None => false,
        }
    }
}
