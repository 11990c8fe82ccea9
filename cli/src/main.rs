pub mod commands;

use std::process;

use clap::Parser;
use commands::Commands;
use shared::networking::client::Client;
use shared::networking::server::Server;

/// Distributed Mandelbrot render pool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Server(args) => {
            let address = match args.address {
                Some(address) => address,
                None => "localhost".to_string(),
            };

            let port = match args.port {
                Some(port) => port,
                None => 8787,
            };

            let workers = match args.workers {
                Some(workers) => workers,
                None => 4,
            };

            let server = Server::new(address, port, workers);
            if server::run_server(&server).await.is_err() {
                process::exit(1);
            }
        }
        Commands::Client(args) => {
            let address = match args.address {
                Some(address) => address,
                None => "localhost".to_string(),
            };

            let port = match args.port {
                Some(port) => port,
                None => 8787,
            };

            let width = match args.width {
                Some(width) => width,
                None => 600,
            };

            let height = match args.height {
                Some(height) => height,
                None => 720,
            };

            let client = Client::new(address, port, width, height);
            if client::run_client(&client).await.is_err() {
                process::exit(1);
            }
        }
    }
}
