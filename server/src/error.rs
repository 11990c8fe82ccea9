use std::fmt;

use shared::networking::error::ChannelError;

/// Fatal conditions inside the render pool. The shutdown sentinel is not
/// among them: it takes the normal return path through every rank.
#[derive(Debug)]
pub enum EngineError {
    /// The front end channel pair failed.
    Channel(ChannelError),
    /// A rank link closed underneath a send or receive.
    PoolDisconnected,
    /// The gather received a row tag it was not expecting.
    ScanlineMismatch { expected: u32, received: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Channel(e) => write!(f, "front end channel failed: {}", e),
            EngineError::PoolDisconnected => {
                write!(f, "a rank disconnected from the render pool")
            }
            EngineError::ScanlineMismatch { expected, received } => {
                write!(
                    f,
                    "gather expected scanline {} but received {}",
                    expected, received
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Channel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChannelError> for EngineError {
    fn from(err: ChannelError) -> Self {
        EngineError::Channel(err)
    }
}
