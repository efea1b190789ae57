pub mod dto {
    pub mod ask;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export DTOs
pub use dto::ask::AskResponse;
