use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use log::{debug, info};
use shared::models::{raster::RasterImage, render_request::RenderRequest, viewport::Viewport};
use shared::networking;
use shared::networking::result::ChannelResult;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::watch;

use crate::log_error;

/// The latest thing the window wants from the render pool. Kept in a watch
/// channel so rapid navigation coalesces into the newest viewport instead
/// of queueing stale frames.
#[derive(Debug, Clone, Copy)]
pub enum SessionCommand {
    Render(Viewport),
    Shutdown,
}

/// Frame slot shared with the window; replaced after every round trip.
pub type SharedFrame = Arc<Mutex<Option<RasterImage>>>;

/// Owns the channel pair for the whole session, one round trip per command.
/// On `Shutdown` it flushes the sentinel; on any channel failure it stops.
/// Either way it drops the `alive` flag and acknowledges, so the window
/// knows the sentinel had its chance to reach the pool.
pub async fn run_session<R, W>(
    mut responses: R,
    mut requests: W,
    mut commands: watch::Receiver<SessionCommand>,
    frame: SharedFrame,
    alive: Arc<AtomicBool>,
    ack: Sender<()>,
) where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let command = *commands.borrow_and_update();

        match command {
            SessionCommand::Render(viewport) => {
                if let Err(e) = render_pass(&mut responses, &mut requests, &viewport, &frame).await
                {
                    log_error("render_pass", e);
                    break;
                }
            }
            SessionCommand::Shutdown => {
                match networking::write_request(&mut requests, &RenderRequest::shutdown()).await {
                    Ok(()) => info!("Shutdown request sent to the render pool"),
                    Err(e) => log_error("write_request", e),
                }
                break;
            }
        }

        if commands.changed().await.is_err() {
            break;
        }
    }

    alive.store(false, Ordering::SeqCst);
    let _ = ack.send(());
}

async fn render_pass<R, W>(
    responses: &mut R,
    requests: &mut W,
    viewport: &Viewport,
    frame: &SharedFrame,
) -> ChannelResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    networking::write_request(requests, &RenderRequest::render(*viewport)).await?;
    let raster = networking::read_raster(responses, viewport.width_px, viewport.height_px).await?;
    debug!("Frame of {} bytes received from the render pool", raster.len());

    *frame.lock().unwrap() = Some(raster);
    Ok(())
}
