use serde::{Deserialize, Serialize};

/// Front end configuration: where the render pool lives and the initial
/// window dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub address: String,
    pub port: u16,
    pub width: u32,
    pub height: u32,
}

impl Client {
    pub fn new(address: String, port: u16, width: u32, height: u32) -> Self {
        Self {
            address,
            port,
            width,
            height,
        }
    }
}
