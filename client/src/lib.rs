pub mod app;
pub mod error;
pub mod result;
pub mod session;
pub mod view;

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc, Mutex};

use error_iter::ErrorIter as _;
use log::{error, info};
use shared::networking::client::Client;
use shared::networking::error::ChannelError;
use shared::{env, logger};
use tokio::net::TcpStream;
use tokio::sync::watch;

use crate::result::ClientResult;
use crate::session::{SessionCommand, SharedFrame};
use crate::view::ViewState;

/// Connects to the render pool, spawns the session task that owns the
/// channel pair, then hands the main thread to the window loop.
pub async fn run_client(client: &Client) -> ClientResult<()> {
    env::init();
    logger::init();

    let addr = format!("{}:{}", client.address, client.port);
    let stream = match TcpStream::connect(&addr).await {
        Ok(stream) => stream,
        Err(e) => {
            error!("Failed to reach the render pool at {}: {}", addr, e);
            return Err(ChannelError::Open(e).into());
        }
    };
    info!("Connected to the render pool at {}", addr);

    let (responses, requests) = stream.into_split();

    let view = ViewState::new(client.width, client.height);
    let (commands, command_feed) = watch::channel(SessionCommand::Render(view.viewport()));
    let frame: SharedFrame = Arc::new(Mutex::new(None));
    let session_alive = Arc::new(AtomicBool::new(true));
    let (ack_tx, ack_rx) = mpsc::channel();

    tokio::spawn(session::run_session(
        responses,
        requests,
        command_feed,
        Arc::clone(&frame),
        Arc::clone(&session_alive),
        ack_tx,
    ));

    app::run(view, commands, frame, session_alive, ack_rx)
}

pub(crate) fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
