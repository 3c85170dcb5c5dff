pub mod error;
pub mod money;
pub mod pagination;

pub use error::{AppError, Result};
pub use pagination::Paged;
