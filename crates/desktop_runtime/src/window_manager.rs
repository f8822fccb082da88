//! Per-window geometry state machine: drag, resize, and maximize/restore.
//!
//! Geometry belongs to the mounted window, not to [`crate::model::DesktopState`]. The view layer
//! feeds pointer input into [`WindowFrame::apply`] and acquires or releases its document-level
//! pointer listeners according to the returned [`ListenerIntent`].

use crate::model::{
    PointerPosition, Viewport, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Base offset for a freshly opened window, on both axes.
pub const INITIAL_OFFSET_BASE: i32 = 50;
/// Random spread added on top of [`INITIAL_OFFSET_BASE`].
pub const INITIAL_OFFSET_SPREAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer gesture in progress.
pub enum Gesture {
    /// No gesture.
    Idle,
    /// Title bar drag; `offset` is pointer minus window origin at gesture start.
    Dragging {
        /// Grab offset.
        offset: PointerPosition,
    },
    /// Bottom-right handle resize.
    Resizing {
        /// Pointer at gesture start.
        pointer_start: PointerPosition,
        /// Width and height at gesture start.
        size_start: (i32, i32),
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer and control input for one window.
pub enum WindowInput {
    /// Primary pointer pressed inside the title bar.
    TitleBarDown {
        /// Pointer position.
        pointer: PointerPosition,
        /// Whether the press landed on a traffic-light control.
        on_control: bool,
    },
    /// Primary pointer pressed on the resize handle.
    ResizeHandleDown(PointerPosition),
    /// Document-level pointer move.
    PointerMove(PointerPosition),
    /// Document-level pointer release.
    PointerUp,
    /// Maximize control or title-bar double click.
    ToggleMaximize(Viewport),
    /// The window view is being torn down.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the view layer must do with its document pointer listeners.
pub enum ListenerIntent {
    /// Install move/up listeners.
    Acquire,
    /// Drop the installed listeners.
    Release,
    /// Leave listeners as they are.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of feeding one [`WindowInput`] into a [`WindowFrame`].
pub struct WindowOutcome {
    /// Listener bookkeeping for the view.
    pub listeners: ListenerIntent,
    /// Whether the rendered geometry changed.
    pub geometry_changed: bool,
}

impl WindowOutcome {
    const NONE: Self = Self {
        listeners: ListenerIntent::Keep,
        geometry_changed: false,
    };

    const fn moved() -> Self {
        Self {
            listeners: ListenerIntent::Keep,
            geometry_changed: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Geometry and gesture state of one mounted window.
pub struct WindowFrame {
    /// Current rectangle.
    pub rect: WindowRect,
    /// Whether the window fills the desktop area.
    pub maximized: bool,
    /// Rectangle to return to when leaving the maximized state.
    pub restore_rect: Option<WindowRect>,
    /// Gesture in progress.
    pub gesture: Gesture,
}

impl WindowFrame {
    /// Creates an idle, non-maximized frame at `rect`.
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            maximized: false,
            restore_rect: None,
            gesture: Gesture::Idle,
        }
    }

    /// Places a new `width` × `height` window at a randomized offset from two unit samples.
    pub fn with_random_offset(width: i32, height: i32, rx: f64, ry: f64) -> Self {
        let jitter = |r: f64| INITIAL_OFFSET_BASE + (r.clamp(0.0, 1.0) * INITIAL_OFFSET_SPREAD) as i32;
        Self::new(WindowRect {
            x: jitter(rx),
            y: jitter(ry),
            w: width,
            h: height,
        })
    }

    /// Whether a drag or resize is in progress.
    pub fn is_gesturing(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Whether the resize handle is shown.
    pub fn resize_handle_visible(&self) -> bool {
        !self.maximized
    }

    /// Inline CSS positioning the window.
    pub fn style(&self, z_index: u32) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.rect.x, self.rect.y, self.rect.w, self.rect.h, z_index
        )
    }

    /// Applies `input` and reports listener and geometry changes.
    pub fn apply(&mut self, input: WindowInput) -> WindowOutcome {
        match input {
            WindowInput::TitleBarDown {
                pointer,
                on_control,
            } => {
                if self.is_gesturing() || on_control {
                    return WindowOutcome::NONE;
                }
                self.gesture = Gesture::Dragging {
                    offset: PointerPosition {
                        x: pointer.x - self.rect.x,
                        y: pointer.y - self.rect.y,
                    },
                };
                WindowOutcome {
                    listeners: ListenerIntent::Acquire,
                    geometry_changed: false,
                }
            }
            WindowInput::ResizeHandleDown(pointer) => {
                if self.is_gesturing() || self.maximized {
                    return WindowOutcome::NONE;
                }
                self.gesture = Gesture::Resizing {
                    pointer_start: pointer,
                    size_start: (self.rect.w, self.rect.h),
                };
                WindowOutcome {
                    listeners: ListenerIntent::Acquire,
                    geometry_changed: false,
                }
            }
            WindowInput::PointerMove(pointer) => match self.gesture {
                Gesture::Idle => WindowOutcome::NONE,
                Gesture::Dragging { offset } => {
                    self.rect = WindowRect {
                        x: pointer.x - offset.x,
                        y: pointer.y - offset.y,
                        ..self.rect
                    };
                    WindowOutcome::moved()
                }
                Gesture::Resizing {
                    pointer_start,
                    size_start: (w, h),
                } => {
                    let (dx, dy) = pointer.delta_from(pointer_start);
                    self.rect = WindowRect {
                        w: w + dx,
                        h: h + dy,
                        ..self.rect
                    }
                    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                    WindowOutcome::moved()
                }
            },
            WindowInput::PointerUp | WindowInput::Unmount => self.end_gesture(),
            WindowInput::ToggleMaximize(viewport) => {
                let mut outcome = self.end_gesture();
                if self.maximized {
                    if let Some(rect) = self.restore_rect.take() {
                        self.rect = rect;
                    }
                    self.maximized = false;
                } else {
                    self.restore_rect = Some(self.rect);
                    self.rect = viewport.maximized_rect();
                    self.maximized = true;
                }
                outcome.geometry_changed = true;
                outcome
            }
        }
    }

    fn end_gesture(&mut self) -> WindowOutcome {
        if self.is_gesturing() {
            self.gesture = Gesture::Idle;
            WindowOutcome {
                listeners: ListenerIntent::Release,
                geometry_changed: false,
            }
        } else {
            WindowOutcome::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn frame() -> WindowFrame {
        WindowFrame::new(WindowRect {
            x: 100,
            y: 80,
            w: 600,
            h: 400,
        })
    }

    fn title_bar_down(pointer: PointerPosition) -> WindowInput {
        WindowInput::TitleBarDown {
            pointer,
            on_control: false,
        }
    }

    const VIEWPORT: Viewport = Viewport {
        width: 1440,
        height: 900,
    };

    #[test]
    fn random_offset_stays_in_documented_band() {
        let low = WindowFrame::with_random_offset(600, 400, 0.0, 0.0);
        let high = WindowFrame::with_random_offset(600, 400, 0.999, 0.5);
        assert_eq!((low.rect.x, low.rect.y), (50, 50));
        assert_eq!((high.rect.x, high.rect.y), (149, 100));
        assert_eq!((high.rect.w, high.rect.h), (600, 400));
    }

    #[test]
    fn drag_follows_pointer_minus_grab_offset_without_clamping() {
        let mut frame = frame();
        let outcome = frame.apply(title_bar_down(at(110, 90)));
        assert_eq!(outcome.listeners, ListenerIntent::Acquire);

        frame.apply(WindowInput::PointerMove(at(5, 3)));
        assert_eq!((frame.rect.x, frame.rect.y), (-5, -7));

        let outcome = frame.apply(WindowInput::PointerUp);
        assert_eq!(outcome.listeners, ListenerIntent::Release);
        assert_eq!(frame.gesture, Gesture::Idle);

        let outcome = frame.apply(WindowInput::PointerMove(at(400, 400)));
        assert_eq!(outcome, WindowOutcome::NONE);
        assert_eq!((frame.rect.x, frame.rect.y), (-5, -7));
    }

    #[test]
    fn resize_never_goes_below_minimum() {
        let mut frame = frame();
        frame.apply(WindowInput::ResizeHandleDown(at(700, 480)));

        frame.apply(WindowInput::PointerMove(at(750, 530)));
        assert_eq!((frame.rect.w, frame.rect.h), (650, 450));

        for pointer in [at(0, 0), at(-500, 470), at(690, -900)] {
            frame.apply(WindowInput::PointerMove(pointer));
            assert!(frame.rect.w >= MIN_WINDOW_WIDTH, "{pointer:?}");
            assert!(frame.rect.h >= MIN_WINDOW_HEIGHT, "{pointer:?}");
        }
        assert_eq!((frame.rect.x, frame.rect.y), (100, 80));
    }

    #[test]
    fn maximize_then_restore_returns_exact_snapshot() {
        let mut frame = frame();
        let before = frame.rect;

        frame.apply(WindowInput::ToggleMaximize(VIEWPORT));
        assert!(frame.maximized);
        assert!(!frame.resize_handle_visible());
        assert_eq!(
            frame.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1440,
                h: 868,
            }
        );

        frame.apply(WindowInput::ToggleMaximize(VIEWPORT));
        assert!(!frame.maximized);
        assert_eq!(frame.rect, before);
        assert_eq!(frame.restore_rect, None);
    }

    #[test]
    fn maximized_window_still_drags_but_does_not_resize() {
        let mut frame = frame();
        frame.apply(WindowInput::ToggleMaximize(VIEWPORT));
        assert_eq!(
            frame.apply(WindowInput::ResizeHandleDown(at(10, 10))),
            WindowOutcome::NONE
        );

        let outcome = frame.apply(title_bar_down(at(10, 10)));
        assert_eq!(outcome.listeners, ListenerIntent::Acquire);
        frame.apply(WindowInput::PointerMove(at(210, 110)));
        assert!(frame.maximized);
        assert_eq!((frame.rect.x, frame.rect.y), (200, 100));
        assert_eq!((frame.rect.w, frame.rect.h), (1440, 868));
    }

    #[test]
    fn press_on_a_control_never_starts_a_drag() {
        let mut frame = frame();
        let outcome = frame.apply(WindowInput::TitleBarDown {
            pointer: at(110, 90),
            on_control: true,
        });
        assert_eq!(outcome, WindowOutcome::NONE);
        assert_eq!(frame.gesture, Gesture::Idle);

        frame.apply(WindowInput::PointerMove(at(300, 300)));
        assert_eq!((frame.rect.x, frame.rect.y), (100, 80));
    }

    #[test]
    fn unmount_mid_gesture_releases_listeners() {
        let mut frame = frame();
        frame.apply(WindowInput::ResizeHandleDown(at(700, 480)));
        assert_eq!(
            frame.apply(WindowInput::Unmount).listeners,
            ListenerIntent::Release
        );
        assert_eq!(
            frame.apply(WindowInput::Unmount).listeners,
            ListenerIntent::Keep
        );
    }

    #[test]
    fn second_pointer_down_does_not_restart_gesture() {
        let mut frame = frame();
        frame.apply(title_bar_down(at(110, 90)));
        assert_eq!(
            frame.apply(WindowInput::ResizeHandleDown(at(700, 480))).listeners,
            ListenerIntent::Keep
        );
        assert!(matches!(frame.gesture, Gesture::Dragging { .. }));
    }

    #[test]
    fn style_renders_geometry() {
        assert_eq!(
            frame().style(2),
            "left:100px;top:80px;width:600px;height:400px;z-index:2;"
        );
    }
}
