use clap::Parser;

/// 🖥️ Server Command
///
/// This command is used to configure and 🚀 start the render pool.
#[derive(Parser, Debug)]
#[command(name = "server", about = "🚀 Start and configure the render pool.", long_about = None)]
pub struct ServerCommand {
    /// 📌 Listen address
    ///
    /// Specify the IP address 🌐 where the pool will listen for the front
    /// end connection. Defaults to localhost.
    #[arg(short, long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// 🚪 Listen port
    ///
    /// Define the port number 🎛️ on which the pool will listen.
    /// Default is 8787 if not specified.
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// 👷 Worker ranks
    ///
    /// Number of worker ranks in the pool 🧮, fixed for the whole process
    /// lifetime. Default is 4, and at least 1 is always spawned.
    #[arg(short, long, value_name = "WORKERS")]
    pub workers: Option<u32>,
}
