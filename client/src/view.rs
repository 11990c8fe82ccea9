use shared::models::{point::Point, viewport::Viewport};

pub const DEFAULT_TOP_LEFT: Point = Point { x: -2.0, y: 1.5 };
pub const DEFAULT_BOTTOM_RIGHT: Point = Point { x: 0.5, y: -1.5 };

/// Navigation state of the window: the viewport being displayed, the
/// in-progress drag selection and the zoom history.
pub struct ViewState {
    viewport: Viewport,
    history: Vec<Viewport>,
    drag_anchor: Option<(f64, f64)>,
    cursor: (f64, f64),
}

impl ViewState {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            viewport: Viewport::new(width_px, height_px, DEFAULT_TOP_LEFT, DEFAULT_BOTTOM_RIGHT),
            history: Vec::new(),
            drag_anchor: None,
            cursor: (0.0, 0.0),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Window resized: keep the plane corners, render at the new pixel
    /// dimensions.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.viewport.width_px = width_px;
        self.viewport.height_px = height_px;
    }

    pub fn track_cursor(&mut self, position: (f64, f64)) {
        self.cursor = position;
    }

    pub fn begin_drag(&mut self, position: (f64, f64)) {
        self.cursor = position;
        self.drag_anchor = Some(position);
    }

    /// The selection rectangle in pixel coordinates: the anchor and the
    /// aspect-locked far corner. Unnormalized; a leftward drag puts the
    /// corner left of the anchor.
    pub fn drag_rect(&self) -> Option<((f64, f64), (f64, f64))> {
        let anchor = self.drag_anchor?;
        Some((anchor, self.locked_corner(anchor)))
    }

    // The far corner follows the cursor x and derives y from the window
    // aspect ratio, so every selection zooms without distortion.
    fn locked_corner(&self, anchor: (f64, f64)) -> (f64, f64) {
        let ratio = self.viewport.height_px as f64 / self.viewport.width_px as f64;
        let x = self.cursor.0;
        (x, (x - anchor.0) * ratio + anchor.1)
    }

    /// Ends the drag and zooms into the selection. `None` when no drag was
    /// in progress or the selection collapsed to a point.
    pub fn commit_zoom(&mut self) -> Option<Viewport> {
        let (anchor, corner) = self.drag_rect()?;
        self.drag_anchor = None;

        if anchor.0 == corner.0 {
            return None;
        }

        let width = self.viewport.width_px as f64;
        let height = self.viewport.height_px as f64;
        let left = anchor.0.min(corner.0);
        let right = anchor.0.max(corner.0);
        let top = anchor.1.min(corner.1);
        let bottom = anchor.1.max(corner.1);

        let top_left = self.viewport.plane_at(left / width, top / height);
        let bottom_right = self.viewport.plane_at(right / width, bottom / height);

        self.history.push(self.viewport);
        self.viewport.top_left = top_left;
        self.viewport.bottom_right = bottom_right;
        Some(self.viewport)
    }

    /// Steps back through the zoom history; an empty history resets to the
    /// default view. Pixel dimensions always stay current.
    pub fn pop_view(&mut self) -> Viewport {
        let (top_left, bottom_right) = match self.history.pop() {
            Some(previous) => (previous.top_left, previous.bottom_right),
            None => (DEFAULT_TOP_LEFT, DEFAULT_BOTTOM_RIGHT),
        };
        self.viewport.top_left = top_left;
        self.viewport.bottom_right = bottom_right;
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_view() {
        let view = ViewState::new(600, 720);
        let viewport = view.viewport();
        assert_eq!(viewport.top_left, DEFAULT_TOP_LEFT);
        assert_eq!(viewport.bottom_right, DEFAULT_BOTTOM_RIGHT);
        assert_eq!((viewport.width_px, viewport.height_px), (600, 720));
    }

    #[test]
    fn the_selection_corner_locks_to_the_window_aspect() {
        let mut view = ViewState::new(300, 600);
        view.begin_drag((30.0, 40.0));
        view.track_cursor((80.0, 500.0)); // cursor y plays no part

        let (anchor, corner) = view.drag_rect().unwrap();
        assert_eq!(anchor, (30.0, 40.0));
        assert_eq!(corner, (80.0, 140.0)); // (80 - 30) * 2 + 40
    }

    #[test]
    fn committing_a_selection_zooms_the_plane_rectangle() {
        let mut view = ViewState::new(4, 4);
        view.begin_drag((1.0, 1.0));
        view.track_cursor((3.0, 0.0));

        let next = view.commit_zoom().unwrap();
        assert_eq!(next.top_left, Point::new(-1.375, 0.75));
        assert_eq!(next.bottom_right, Point::new(-0.125, -0.75));
        assert_eq!((next.width_px, next.height_px), (4, 4));
    }

    #[test]
    fn a_leftward_drag_normalizes_to_the_same_rectangle() {
        let mut view = ViewState::new(4, 4);
        view.begin_drag((3.0, 3.0));
        view.track_cursor((1.0, 99.0));

        let next = view.commit_zoom().unwrap();
        assert_eq!(next.top_left, Point::new(-1.375, 0.75));
        assert_eq!(next.bottom_right, Point::new(-0.125, -0.75));
        assert!(next.top_left.x < next.bottom_right.x);
        assert!(next.top_left.y > next.bottom_right.y);
    }

    #[test]
    fn a_collapsed_selection_does_not_zoom() {
        let mut view = ViewState::new(4, 4);
        let before = view.viewport();
        view.begin_drag((2.0, 2.0));

        assert!(view.commit_zoom().is_none());
        assert_eq!(view.viewport(), before);
        assert!(view.drag_rect().is_none());
    }

    #[test]
    fn right_click_walks_back_through_history_then_resets() {
        let mut view = ViewState::new(4, 4);
        let initial = view.viewport();

        view.begin_drag((1.0, 1.0));
        view.track_cursor((3.0, 0.0));
        let zoomed = view.commit_zoom().unwrap();
        assert_ne!(zoomed, initial);

        assert_eq!(view.pop_view(), initial);

        let reset = view.pop_view();
        assert_eq!(reset.top_left, DEFAULT_TOP_LEFT);
        assert_eq!(reset.bottom_right, DEFAULT_BOTTOM_RIGHT);
    }

    #[test]
    fn resizing_keeps_the_plane_corners() {
        let mut view = ViewState::new(600, 720);
        view.resize(800, 600);

        let viewport = view.viewport();
        assert_eq!((viewport.width_px, viewport.height_px), (800, 600));
        assert_eq!(viewport.top_left, DEFAULT_TOP_LEFT);
        assert_eq!(viewport.bottom_right, DEFAULT_BOTTOM_RIGHT);
    }
}
