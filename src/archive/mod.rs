pub mod error;
pub mod key;
pub mod store;

pub use error::ArchiveError;
pub use key::is_valid_key;
pub use store::{ArchiveStore, STORE_FILE_NAME};
