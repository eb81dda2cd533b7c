use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect, Response};

mod router;
pub use router::route_event;

pub const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
pub const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
pub const REDO_ALT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas-local coordinates (origin at the canvas top-left)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// History navigation requested from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// Input events the canvas reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed on the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button is held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer left the canvas while the primary button is held
    PointerLeave { last_known_location: InputLocation },
    Shortcut(HistoryAction),
}

/// Pointer facts for one frame, as reported by the canvas widget
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    pub drag_started: bool,
    pub dragged: bool,
    pub drag_stopped: bool,
    /// Screen position of the pointer, if known
    pub position: Option<Pos2>,
}

impl PointerFrame {
    pub fn from_response(response: &Response) -> Self {
        Self {
            drag_started: response.drag_started_by(PointerButton::Primary),
            dragged: response.dragged_by(PointerButton::Primary),
            drag_stopped: response.drag_stopped_by(PointerButton::Primary),
            position: response.interact_pointer_pos().or(response.hover_pos()),
        }
    }
}

/// Turns raw egui pointer and keyboard input into canvas events
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    dragging: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            dragging: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process one frame of canvas pointer input
    pub fn process_pointer(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if frame.drag_started {
            if let Some(pos) = frame.position {
                let location = self.make_location(pos);
                if location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                    self.dragging = true;
                    self.last_pointer_pos = Some(pos);
                }
            }
        } else if self.dragging && frame.dragged {
            if let Some(pos) = frame.position {
                let location = self.make_location(pos);
                if !location.is_in_canvas {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: location,
                    });
                    self.dragging = false;
                } else if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                }
                self.last_pointer_pos = Some(pos);
            }
        }

        if self.dragging && frame.drag_stopped {
            let pos = frame.position.or(self.last_pointer_pos);
            if let Some(pos) = pos {
                events.push(InputEvent::PointerUp {
                    location: self.make_location(pos),
                });
            }
            self.dragging = false;
        }

        if !self.dragging {
            self.last_pointer_pos = None;
        }

        events
    }

    /// Consume undo/redo keyboard shortcuts
    pub fn process_shortcuts(ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        ctx.input_mut(|input| {
            // Redo first: the undo shortcut also matches with shift held.
            if input.consume_shortcut(&REDO_SHORTCUT) || input.consume_shortcut(&REDO_ALT_SHORTCUT) {
                events.push(InputEvent::Shortcut(HistoryAction::Redo));
            } else if input.consume_shortcut(&UNDO_SHORTCUT) {
                events.push(InputEvent::Shortcut(HistoryAction::Undo));
            }
        });
        events
    }
}
