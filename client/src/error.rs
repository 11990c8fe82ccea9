use std::fmt;

use shared::networking::error::ChannelError;

#[derive(Debug)]
pub enum ClientError {
    /// The channel pair to the render pool failed.
    Channel(ChannelError),
    /// The pixel surface could not be created.
    Render(pixels::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Channel(e) => write!(f, "render pool channel failed: {}", e),
            ClientError::Render(e) => write!(f, "pixel surface failed: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Channel(e) => Some(e),
            ClientError::Render(e) => Some(e),
        }
    }
}

impl From<ChannelError> for ClientError {
    fn from(err: ChannelError) -> Self {
        ClientError::Channel(err)
    }
}

impl From<pixels::Error> for ClientError {
    fn from(err: pixels::Error) -> Self {
        ClientError::Render(err)
    }
}
