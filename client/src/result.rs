use crate::error::ClientError;

pub type ClientResult<T> = Result<T, ClientError>;
