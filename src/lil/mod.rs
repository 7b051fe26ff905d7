//! Sparse matrices in list-of-lists (LIL) form: a sorted sequence of
//! non-empty rows, each a sorted sequence of (column, value) entries.
//! Cells never written read as 0; explicitly stored zeros are kept.

pub use crate::MatTrait;

mod mat;
mod row;
pub use mat::LilMat;
pub use row::LilRow;
