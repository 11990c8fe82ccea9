use serde::{Deserialize, Serialize};

/// Render pool endpoint configuration. The worker count is fixed for the
/// whole process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
    pub workers: u32,
}

impl Server {
    pub fn new(address: String, port: u16, workers: u32) -> Self {
        Self {
            address,
            port,
            workers,
        }
    }
}
