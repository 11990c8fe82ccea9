use super::error::ChannelError;

pub type ChannelResult<T> = Result<T, ChannelError>;
