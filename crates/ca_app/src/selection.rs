/// Platform-neutral integer rectangle.
///
/// Bounds are stored normalized (`left <= right`, `top <= bottom`) whenever the rectangle is built
/// through [`RectI32::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// The cleared/initial selection.
    pub const EMPTY: RectI32 = RectI32 {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Saturates at the `i32` range for rectangles spanning more than `i32::MAX`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Construct a normalized rectangle from two points.
    #[inline]
    pub fn from_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    /// Shift the rectangle vertically by `dy`, clamping at the `i32` range.
    #[inline]
    pub fn offset_y(&self, dy: i32) -> Self {
        Self {
            left: self.left,
            top: self.top.saturating_add(dy),
            right: self.right,
            bottom: self.bottom.saturating_add(dy),
        }
    }
}

/// Pointer identifier as reported by the host.
///
/// Only [`PointerId::PRIMARY`] drives the selection; other pointers are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

impl PointerId {
    pub const PRIMARY: PointerId = PointerId(0);

    #[inline]
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

/// Start/end points of the gesture in progress, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl DragSession {
    fn at(x: i32, y: i32) -> Self {
        Self {
            start: (x, y),
            end: (x, y),
        }
    }

    /// Normalized bounds of start and end.
    #[inline]
    pub fn bounds(&self) -> RectI32 {
        RectI32::from_points(self.start.0, self.start.1, self.end.0, self.end.1)
    }
}

/// Gesture phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pointer pressed. Starts (or restarts) the drag session at this point.
    PointerDown { pointer: PointerId, x: i32, y: i32 },

    /// Pointer moved while pressed.
    PointerMove { pointer: PointerId, x: i32, y: i32 },

    /// Pointer released. Recomputes the rectangle like a move, then ends the session.
    PointerUp { pointer: PointerId, x: i32, y: i32 },

    /// Reset the rectangle to empty. The drag session (if any) is left untouched.
    ClearSelection,
}

impl Action {
    #[inline]
    pub fn down(x: i32, y: i32) -> Self {
        Action::PointerDown {
            pointer: PointerId::PRIMARY,
            x,
            y,
        }
    }

    #[inline]
    pub fn move_to(x: i32, y: i32) -> Self {
        Action::PointerMove {
            pointer: PointerId::PRIMARY,
            x,
            y,
        }
    }

    #[inline]
    pub fn up(x: i32, y: i32) -> Self {
        Action::PointerUp {
            pointer: PointerId::PRIMARY,
            x,
            y,
        }
    }
}

/// Effects requested by the surface (executed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The outline changed; the host should repaint the surface.
    RequestRedraw { selection: RectI32 },
}

/// Selection surface model.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
    session: Option<DragSession>,
    rect: RectI32,
}

impl Model {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Current rectangle in surface (display) coordinates.
    ///
    /// Returns [`RectI32::EMPTY`] until the first drag event.
    pub fn current_rectangle(&self) -> RectI32 {
        self.rect
    }

    /// Reset the rectangle to empty and request a redraw. Idempotent.
    pub fn clear_selection(&mut self) -> Vec<Effect> {
        self.rect = RectI32::EMPTY;
        vec![Effect::RequestRedraw {
            selection: self.rect,
        }]
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::PointerDown { pointer, x, y } => {
                if !pointer.is_primary() {
                    return Vec::new();
                }

                // A second press while dragging restarts the session here.
                let session = DragSession::at(x, y);
                self.session = Some(session);
                self.phase = Phase::Dragging;
                self.rect = session.bounds();
                vec![Effect::RequestRedraw {
                    selection: self.rect,
                }]
            }

            Action::PointerMove { pointer, x, y } => {
                if !pointer.is_primary() {
                    return Vec::new();
                }
                self.track(x, y)
            }

            Action::PointerUp { pointer, x, y } => {
                if !pointer.is_primary() {
                    return Vec::new();
                }
                let effects = self.track(x, y);
                self.phase = Phase::Idle;
                effects
            }

            Action::ClearSelection => self.clear_selection(),
        }
    }

    fn track(&mut self, x: i32, y: i32) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if self.phase != Phase::Dragging {
            return Vec::new();
        }

        session.end = (x, y);
        self.rect = session.bounds();
        vec![Effect::RequestRedraw {
            selection: self.rect,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Effect, Model, Phase, PointerId, RectI32};

    #[test]
    fn starts_empty() {
        let m = Model::default();
        assert_eq!(m.current_rectangle(), RectI32::EMPTY);
        assert!(m.current_rectangle().is_empty());
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn press_creates_degenerate_rect_at_point() {
        let mut m = Model::default();
        let eff = m.reduce(Action::down(40, 50));

        let expected = RectI32::new(40, 50, 40, 50);
        assert_eq!(m.current_rectangle(), expected);
        assert_eq!(m.phase(), Phase::Dragging);
        assert_eq!(
            eff,
            vec![Effect::RequestRedraw {
                selection: expected
            }]
        );
    }

    #[test]
    fn drag_down_right_produces_bounds() {
        let mut m = Model::default();
        m.reduce(Action::down(10, 20));
        m.reduce(Action::move_to(50, 60));
        m.reduce(Action::up(110, 220));

        assert_eq!(m.current_rectangle(), RectI32::new(10, 20, 110, 220));
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn drag_up_left_is_normalized() {
        let mut m = Model::default();
        m.reduce(Action::down(300, 400));
        m.reduce(Action::move_to(250, 500));
        m.reduce(Action::up(100, 100));

        let r = m.current_rectangle();
        assert_eq!(r, RectI32::new(100, 100, 300, 400));
        assert!(r.left <= r.right && r.top <= r.bottom);
    }

    #[test]
    fn every_intermediate_rect_is_normalized() {
        let path = [(5, 5), (-20, 40), (60, -3), (0, 0), (17, 90), (-8, -8)];
        let mut m = Model::default();
        m.reduce(Action::down(10, 10));
        for (x, y) in path {
            m.reduce(Action::move_to(x, y));
            let r = m.current_rectangle();
            assert!(r.left <= r.right, "{r:?}");
            assert!(r.top <= r.bottom, "{r:?}");
        }
        m.reduce(Action::up(-8, -8));
        assert_eq!(m.current_rectangle(), RectI32::new(-8, -8, 10, 10));
    }

    #[test]
    fn second_press_restarts_session() {
        let mut m = Model::default();
        m.reduce(Action::down(0, 0));
        m.reduce(Action::move_to(100, 100));

        m.reduce(Action::down(500, 500));
        assert_eq!(m.current_rectangle(), RectI32::new(500, 500, 500, 500));

        m.reduce(Action::move_to(450, 520));
        assert_eq!(m.current_rectangle(), RectI32::new(450, 500, 500, 520));
    }

    #[test]
    fn clear_selection_is_empty_and_idempotent() {
        let mut m = Model::default();
        m.reduce(Action::down(0, 0));
        m.reduce(Action::up(80, 80));

        let eff = m.clear_selection();
        assert!(m.current_rectangle().is_empty());
        assert_eq!(
            eff,
            vec![Effect::RequestRedraw {
                selection: RectI32::EMPTY
            }]
        );

        m.reduce(Action::ClearSelection);
        assert_eq!(m.current_rectangle(), RectI32::EMPTY);
    }

    #[test]
    fn clear_mid_drag_keeps_session() {
        let mut m = Model::default();
        m.reduce(Action::down(10, 10));
        m.reduce(Action::move_to(40, 40));
        m.clear_selection();
        assert_eq!(m.current_rectangle(), RectI32::EMPTY);

        // The session still remembers its start point.
        m.reduce(Action::move_to(60, 30));
        assert_eq!(m.current_rectangle(), RectI32::new(10, 10, 60, 30));
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut m = Model::default();
        assert!(m.reduce(Action::move_to(5, 5)).is_empty());
        assert!(m.reduce(Action::up(5, 5)).is_empty());
        assert_eq!(m.current_rectangle(), RectI32::EMPTY);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut m = Model::default();
        m.reduce(Action::down(0, 0));
        m.reduce(Action::up(20, 20));
        assert!(m.reduce(Action::move_to(90, 90)).is_empty());
        assert_eq!(m.current_rectangle(), RectI32::new(0, 0, 20, 20));
    }

    #[test]
    fn secondary_pointer_is_ignored() {
        let mut m = Model::default();
        m.reduce(Action::down(0, 0));

        let eff = m.reduce(Action::PointerMove {
            pointer: PointerId(1),
            x: 300,
            y: 300,
        });
        assert!(eff.is_empty());
        assert_eq!(m.current_rectangle(), RectI32::new(0, 0, 0, 0));

        let eff = m.reduce(Action::PointerDown {
            pointer: PointerId(2),
            x: 7,
            y: 7,
        });
        assert!(eff.is_empty());
        assert_eq!(m.session().map(|s| s.start), Some((0, 0)));
    }

    #[test]
    fn from_points_and_offset() {
        let r = RectI32::from_points(30, 300, 10, 260);
        assert_eq!(r, RectI32::new(10, 260, 30, 300));
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 40);
        assert_eq!(r.offset_y(-256), RectI32::new(10, 4, 30, 44));
    }

    #[test]
    fn extreme_bounds_saturate() {
        let r = RectI32::from_points(i32::MIN, 300, i32::MAX, 350);
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.height(), 50);

        let shifted = RectI32::new(0, i32::MIN + 10, 10, 10).offset_y(-256);
        assert_eq!(shifted.top, i32::MIN);
        assert_eq!(shifted.bottom, -246);

        let down = RectI32::new(0, 0, 10, i32::MAX - 1).offset_y(256);
        assert_eq!(down.bottom, i32::MAX);
    }
}
