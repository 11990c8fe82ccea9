use clap::Parser;

/// 🖼️ Client Command
///
/// This command opens the front end window and connects it to a render
/// pool.
#[derive(Parser, Debug)]
#[command(name = "client", about = "🖼️ Open the front end window.", long_about = None)]
pub struct ClientCommand {
    /// 📌 Pool address
    ///
    /// Specify the IP address 🌐 of the render pool to connect to.
    /// Defaults to localhost.
    #[arg(short, long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// 🚪 Pool port
    ///
    /// Define the port number 🎛️ the render pool listens on.
    /// Default is 8787 if not specified.
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// 📏 Window width
    ///
    /// Initial window width in pixels 📐. Default is 600.
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u32>,

    /// 📐 Window height
    ///
    /// Initial window height in pixels 🧱. Default is 720.
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u32>,
}
