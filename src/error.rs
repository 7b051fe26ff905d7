use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("shape mismatch: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("row width mismatch: {lhs} cols vs {rhs}")]
    WidthMismatch {
        lhs: usize,
        rhs: usize,
    },
}
