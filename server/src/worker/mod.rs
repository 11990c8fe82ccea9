//! A worker rank. Never touches the front end channels: requests arrive
//! over the broadcast link and scanlines leave over the point-to-point row
//! link.

use log::{debug, info};
use shared::models::{fractal::mandelbrot, scanline::Scanline, viewport::Viewport};

use crate::{partition, result::EngineResult, topology::WorkerLink};

pub struct WorkerRank {
    link: WorkerLink,
}

impl WorkerRank {
    pub fn new(link: WorkerLink) -> Self {
        Self { link }
    }

    /// The rank loop: block on the next broadcast, leave on the sentinel,
    /// otherwise render one pass.
    pub async fn run(mut self) -> EngineResult<()> {
        info!("Worker rank {} online", self.link.rank());

        loop {
            let request = self.link.recv_request().await?;

            if request.is_shutdown() {
                info!("Worker rank {} shutting down", self.link.rank());
                return Ok(());
            }

            self.render_pass(&request.viewport).await?;
        }
    }

    /// Renders this rank's rows in ascending order and streams them to rank
    /// 0. The budget is derived here, not transmitted: every rank computes
    /// the same value from the same viewport.
    async fn render_pass(&self, viewport: &Viewport) -> EngineResult<()> {
        let budget = mandelbrot::iteration_budget(viewport);
        debug!(
            "Worker rank {} starting a render pass, budget {}",
            self.link.rank(),
            budget
        );

        let rows = partition::rows_for_rank(
            viewport.height_px,
            self.link.worker_count(),
            self.link.rank(),
        );
        for row in rows {
            let line = Scanline::render(viewport, row, budget);
            self.link.send_row(line).await?;
        }

        Ok(())
    }
}
