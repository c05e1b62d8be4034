/// Pointer, wheel, key and UI events collected between frames.
///
/// The host pushes events as the browser reports them; the game reads the
/// whole batch once per tick and the runner clears it afterwards.

/// Which pointer button a press came from, in DOM `MouseEvent.button` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left button, pen contact or touch.
    #[default]
    Primary,
    /// Wheel button.
    Middle,
    /// Right button.
    Secondary,
}

impl PointerButton {
    /// Unknown buttons (back, forward, ...) map to `None`.
    pub fn from_dom(button: i32) -> Option<Self> {
        match button {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// Coordinates are viewport pixels, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: PointerButton },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Positive `delta` scrolls away from the user.
    Wheel { delta: f32 },
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// UI control change. `kind` is game-defined; `a`..`c` are its payload.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self { pending: Vec::with_capacity(32) }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.pending.iter()
    }

    /// Forget this frame's batch, keeping the allocation.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
