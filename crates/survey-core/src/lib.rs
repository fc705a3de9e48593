pub mod feedback;
pub mod language;
pub mod theme;
#[cfg(test)]
mod tests;

pub use feedback::{newest_first, validate, FeedbackInput, FeedbackRecord, NewFeedback};
pub use language::{translate, Language};
pub use theme::{Theme, ViewProgress};
