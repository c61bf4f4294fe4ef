use thiserror::Error;

/// Things that can go wrong when working with a [BigInteger](crate::BigInteger)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text was not an optional `-` followed by one or more decimal digits.
    #[error("invalid decimal integer: {0:?}")]
    InvalidFormat(String),
    /// The operation exists, but is not implemented.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
