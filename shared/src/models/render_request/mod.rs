use serde::{Deserialize, Serialize};

use crate::models::{point::Point, viewport::Viewport};

/// One frame request from the front end. `connection_ok == false` is the
/// shutdown sentinel; the viewport carries no meaning in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub connection_ok: bool,
    pub viewport: Viewport,
}

impl RenderRequest {
    pub fn render(viewport: Viewport) -> Self {
        Self {
            connection_ok: true,
            viewport,
        }
    }

    pub fn shutdown() -> Self {
        Self {
            connection_ok: false,
            viewport: Viewport::new(0, 0, Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
        }
    }

    pub fn is_shutdown(&self) -> bool {
        !self.connection_ok
    }
}
