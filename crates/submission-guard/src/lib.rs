mod guard;
mod http;
mod table;
#[cfg(test)]
mod tests;

pub use guard::{SubmissionGuard, SubmitError, DEFAULT_SUBMIT_TIMEOUT};
pub use http::HttpTable;
pub use table::{FeedbackTable, MemoryTable, TableError};
