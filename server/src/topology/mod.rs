//! The in-process rank fabric. One broadcast channel fans requests out from
//! the coordinator to every worker, and one bounded mpsc channel per worker
//! carries scanlines back. Both sides are plain values, so tests can drive
//! either end without sockets or spawned tasks.

use shared::models::{render_request::RenderRequest, scanline::Scanline};
use tokio::sync::{broadcast, mpsc};

use crate::{error::EngineError, result::EngineResult};

const REQUEST_DEPTH: usize = 16;
const ROW_DEPTH: usize = 32;

/// Rank 0's side of the fabric.
pub struct CoordinatorHub {
    world_size: u32,
    requests: broadcast::Sender<RenderRequest>,
    rows: Vec<mpsc::Receiver<Scanline>>,
}

/// One worker rank's side of the fabric.
pub struct WorkerLink {
    rank: u32,
    world_size: u32,
    requests: broadcast::Receiver<RenderRequest>,
    rows: mpsc::Sender<Scanline>,
}

/// Builds the fabric for `worker_count` workers plus the coordinator.
/// Every worker is subscribed to the broadcast before this returns, so no
/// request can be missed.
pub fn build(worker_count: u32) -> (CoordinatorHub, Vec<WorkerLink>) {
    let world_size = worker_count + 1;
    let (request_tx, _) = broadcast::channel(REQUEST_DEPTH);

    let mut links = Vec::with_capacity(worker_count as usize);
    let mut row_receivers = Vec::with_capacity(worker_count as usize);

    for rank in 1..=worker_count {
        let (row_tx, row_rx) = mpsc::channel(ROW_DEPTH);
        links.push(WorkerLink {
            rank,
            world_size,
            requests: request_tx.subscribe(),
            rows: row_tx,
        });
        row_receivers.push(row_rx);
    }

    let hub = CoordinatorHub {
        world_size,
        requests: request_tx,
        rows: row_receivers,
    };

    (hub, links)
}

impl CoordinatorHub {
    pub fn world_size(&self) -> u32 {
        self.world_size
    }

    pub fn worker_count(&self) -> u32 {
        self.world_size - 1
    }

    /// Fans a request out to every worker rank.
    pub fn broadcast(&self, request: RenderRequest) -> EngineResult<()> {
        self.requests
            .send(request)
            .map(|_| ())
            .map_err(|_| EngineError::PoolDisconnected)
    }

    /// Next scanline from the given worker rank, in that rank's send order.
    pub async fn recv_row(&mut self, rank: u32) -> EngineResult<Scanline> {
        self.rows[(rank - 1) as usize]
            .recv()
            .await
            .ok_or(EngineError::PoolDisconnected)
    }
}

impl WorkerLink {
    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn world_size(&self) -> u32 {
        self.world_size
    }

    pub fn worker_count(&self) -> u32 {
        self.world_size - 1
    }

    /// Blocks until the coordinator broadcasts the next request.
    pub async fn recv_request(&mut self) -> EngineResult<RenderRequest> {
        self.requests
            .recv()
            .await
            .map_err(|_| EngineError::PoolDisconnected)
    }

    /// Sends one scanline to rank 0; applies backpressure when the link is
    /// full.
    pub async fn send_row(&self, line: Scanline) -> EngineResult<()> {
        self.rows
            .send(line)
            .await
            .map_err(|_| EngineError::PoolDisconnected)
    }
}
