use clap::Subcommand;

use self::{client::ClientCommand, server::ServerCommand};

pub mod client;
pub mod server;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🚀 Start the render pool
    ///
    /// Bind the listener, spawn the worker ranks and serve one front end
    /// session.
    Server(ServerCommand),

    /// 🖼️ Open the front end
    ///
    /// Connect to a render pool and explore the set in a window.
    Client(ClientCommand),
}
