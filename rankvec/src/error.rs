use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("rank {rank} out of range (bound {bound})")]
    OutOfRange { rank: usize, bound: usize },
    #[error("operation requires a non-empty vector")]
    EmptyContainer,
    #[error("invalid range [{lo}, {hi})")]
    InvalidRange { lo: usize, hi: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort strategy `{0}`")]
pub struct UnknownStrategy(pub String);
