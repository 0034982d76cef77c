mod error;
mod pagination;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use pagination::scan_all;
pub use traits::ItemRepository;
pub use types::{ScanCursor, ScanPage};
