use std::fmt;
use std::io;

/// Failures on the byte channels between the front end and the render pool.
/// Both are fatal to the session; nothing is ever retried.
#[derive(Debug)]
pub enum ChannelError {
    /// Could not open the channel in the first place: bind, accept or
    /// connect failed.
    Open(io::Error),
    /// An established channel failed mid-stream, short reads included.
    Io(io::Error),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Open(e) => write!(f, "failed to open the channel: {}", e),
            ChannelError::Io(e) => write!(f, "channel io failed: {}", e),
        }
    }
}

impl std::error::Error for ChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChannelError::Open(e) | ChannelError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ChannelError {
    fn from(err: io::Error) -> Self {
        ChannelError::Io(err)
    }
}
