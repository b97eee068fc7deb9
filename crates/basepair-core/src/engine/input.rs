use crate::core::models::particle_type::ParticleType;
use nalgebra::Point2;

/// User input delivered to a [`SelectionController`](super::selection::SelectionController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a world-space position.
    PointerDown { position: Point2<f64> },
    /// Keyboard key pressed.
    KeyDown { key: char },
    /// A UI control bound to a particle type was activated (e.g. a type button).
    ControlActivated { particle_type: ParticleType },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point2::new(x, y),
        }
    }

    /// Translates a legacy DOM `keyCode` (65 for A, 85 for U, ...) into a key event.
    pub fn from_key_code(code: u32) -> Option<Self> {
        char::from_u32(code)
            .filter(|c| c.is_ascii_graphic())
            .map(|key| InputEvent::KeyDown { key })
    }
}
