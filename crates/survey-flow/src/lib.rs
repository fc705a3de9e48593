//! Respondent-side flow: language choice, theme review, the feedback gate,
//! submission and the admin summary.

pub mod render;
mod route;
mod session;
#[cfg(test)]
mod tests;

pub use route::{FeedbackView, ReviewCursor, ReviewView, Route, View, AUTO_ADVANCE_DELAY};
pub use session::{FlowError, SurveySession};
