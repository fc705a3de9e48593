use std::time::Duration;
use survey_core::{Theme, ViewProgress};

/// Pause before the review moves on to the next theme after a mark. Pacing
/// only.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Review,
    Feedback,
    ThankYou,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    LanguagePicker,
    Home,
    Review(ReviewView),
    Feedback(FeedbackView),
    ThankYou,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub progress: ViewProgress,
    pub current: Theme,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackView {
    Locked { remaining: Vec<Theme> },
    AlreadySubmitted,
    Form { progress: ViewProgress },
}

/// Which theme tab the review shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewCursor {
    index: usize,
}

impl ReviewCursor {
    pub fn current(&self) -> Theme {
        Theme::ALL[self.index]
    }

    pub fn select(&mut self, theme: Theme) {
        self.index = theme.index();
    }

    /// Moves to the next tab unless already on the last one.
    pub fn advance(&mut self) -> Option<Theme> {
        if self.index + 1 < Theme::ALL.len() {
            self.index += 1;
            Some(self.current())
        } else {
            None
        }
    }
}
