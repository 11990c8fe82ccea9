pub mod coordinator;
pub mod error;
pub mod partition;
pub mod result;
pub mod topology;
pub mod worker;

use log::{error, info, warn};
use shared::networking::{error::ChannelError, server::Server};
use shared::{env, logger};
use tokio::net::TcpListener;

use crate::coordinator::Coordinator;
use crate::result::EngineResult;
use crate::worker::WorkerRank;

pub async fn run_server(server: &Server) -> EngineResult<()> {
    env::init();
    logger::init();

    match run(server).await {
        Ok(()) => {
            info!("Render pool shut down gracefully");
            Ok(())
        }
        Err(e) => {
            error!("Render pool error: {}", e);
            Err(e)
        }
    }
}

/// Serves exactly one front end session: bind, accept one connection, split
/// it into the request and response halves, spawn the pool, run the
/// coordinator, then drain the rank tasks.
async fn run(server: &Server) -> EngineResult<()> {
    let worker_count = if server.workers == 0 {
        warn!("Worker count 0 requested, the pool needs at least one rank");
        1
    } else {
        server.workers
    };

    let server_addr = format!("{}:{}", server.address, server.port);
    let listener = TcpListener::bind(&server_addr)
        .await
        .map_err(ChannelError::Open)?;
    info!("Render pool listening on {}", server_addr);

    let (stream, front_end) = listener.accept().await.map_err(ChannelError::Open)?;
    info!("Front end connected from {}", front_end);

    let (requests, responses) = stream.into_split();

    let (hub, links) = topology::build(worker_count);
    info!(
        "Spawning {} worker ranks, world size {}",
        hub.worker_count(),
        hub.world_size()
    );

    let mut ranks = Vec::with_capacity(links.len());
    for link in links {
        ranks.push(tokio::spawn(WorkerRank::new(link).run()));
    }

    let outcome = Coordinator::new(requests, responses, hub).run().await;

    for handle in ranks {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Worker rank error: {}", e),
            Err(e) => error!("Worker rank panicked: {}", e),
        }
    }

    outcome
}
