use egui::{Context, Event, LayerId, PointerButton, Pos2, Rect};

/// Pointer input already narrowed down to what the drawing surface reacts to.
///
/// Positions are in screen coordinates; the surface maps them to its own space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the surface
    PointerDown { position: Pos2 },
    /// Pointer moved inside the surface during a gesture
    PointerMove { position: Pos2 },
    /// Primary button released during a gesture
    PointerUp { position: Pos2 },
    /// Pointer left the surface area
    PointerLeave,
}

/// Handles converting raw egui input into surface [`InputEvent`]s.
///
/// Works on the frame's raw event stream, so every sample between two frames
/// is kept, including a press, drag and release that all land in one frame.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// A press on the surface has not been released or left yet
    gesture_active: bool,
    /// Pointer was over the surface after the last processed event
    inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Process this frame's egui input against the on-screen surface rect.
    ///
    /// Presses over another layer (popups, windows) that covers the surface
    /// are not presses on the surface.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        surface_rect: Rect,
        surface_layer: LayerId,
    ) -> Vec<InputEvent> {
        let raw_events = ctx.input(|input| input.events.clone());
        self.translate(&raw_events, surface_rect, |pos| {
            ctx.layer_id_at(pos)
                .is_some_and(|layer| layer != surface_layer)
        })
    }

    /// Translate raw events in order. `covered` reports whether something is
    /// painted over the surface at a position.
    pub fn translate(
        &mut self,
        raw_events: &[Event],
        surface_rect: Rect,
        covered: impl Fn(Pos2) -> bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw_events {
            match *event {
                Event::PointerMoved(pos) => {
                    let inside_now = surface_rect.contains(pos);
                    if self.gesture_active {
                        if inside_now {
                            events.push(InputEvent::PointerMove { position: pos });
                        } else {
                            // The leaving sample itself lies outside and is not drawn
                            events.push(InputEvent::PointerLeave);
                            self.gesture_active = false;
                        }
                    } else if self.inside && !inside_now {
                        events.push(InputEvent::PointerLeave);
                    }
                    self.inside = inside_now;
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    self.inside = surface_rect.contains(pos);
                    if self.inside && !covered(pos) {
                        events.push(InputEvent::PointerDown { position: pos });
                        self.gesture_active = true;
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if self.gesture_active {
                        events.push(InputEvent::PointerUp { position: pos });
                        self.gesture_active = false;
                    }
                }
                Event::PointerGone => {
                    if self.inside || self.gesture_active {
                        events.push(InputEvent::PointerLeave);
                    }
                    self.inside = false;
                    self.gesture_active = false;
                }
                _ => {}
            }
        }

        events
    }
}
