mod base;
pub use base::MatTrait;

mod error;
pub use error::{Error, Result};

pub mod lil;
pub use lil::{LilMat, LilRow};
