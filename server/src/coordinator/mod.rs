//! Rank 0. Owns both halves of the front end channel pair exclusively and
//! drives the render loop: read a request, fan it out, gather the rows back
//! in raster order, write the frame.

use log::{debug, info};
use shared::models::{fractal::mandelbrot, raster::RasterImage, viewport::Viewport};
use shared::networking;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::{error::EngineError, partition, result::EngineResult, topology::CoordinatorHub};

pub struct Coordinator<R, W> {
    requests: R,
    responses: W,
    hub: CoordinatorHub,
}

impl<R, W> Coordinator<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(requests: R, responses: W, hub: CoordinatorHub) -> Self {
        Self {
            requests,
            responses,
            hub,
        }
    }

    /// The session loop. Returns `Ok` when the front end sends the shutdown
    /// sentinel; every other exit is a fatal session error. The sentinel is
    /// re-broadcast before returning so the worker ranks leave their loops
    /// too.
    pub async fn run(mut self) -> EngineResult<()> {
        loop {
            let request = networking::read_request(&mut self.requests).await?;
            self.hub.broadcast(request)?;

            if request.is_shutdown() {
                info!("Shutdown request received, leaving the render loop");
                return Ok(());
            }

            let viewport = request.viewport;
            let budget = mandelbrot::iteration_budget(&viewport);
            info!(
                "RenderRequest received: {}x{} viewport, iteration budget {}",
                viewport.width_px, viewport.height_px, budget
            );
            debug!("{:?}", viewport);

            let raster = self.gather(&viewport).await?;
            networking::write_raster(&mut self.responses, &raster).await?;
            info!("RasterImage of {} bytes sent to the front end", raster.len());
        }
    }

    /// Collects rows `0..height_px` in raster order, each from its owning
    /// rank. Per-link FIFO plus the ascending send order on every rank make
    /// this safe at any link capacity. A row tag that does not match the
    /// expected row fails the session.
    async fn gather(&mut self, viewport: &Viewport) -> EngineResult<RasterImage> {
        let workers = self.hub.worker_count();
        let mut raster = RasterImage::new(viewport.width_px, viewport.height_px);

        for row in 0..viewport.height_px {
            let owner = partition::owner_of_row(row, workers);
            let line = self.hub.recv_row(owner).await?;

            if line.row != row {
                return Err(EngineError::ScanlineMismatch {
                    expected: row,
                    received: line.row,
                });
            }

            raster.append_scanline(&line);
        }

        Ok(raster)
    }
}
