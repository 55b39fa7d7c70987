use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::models::SessionResults;

/// Qualitative rating of a finished session, keyed on accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTier {
    /// Every answered question correct.
    Perfect,
    /// At least 80% correct.
    Great,
    /// At least 50% correct.
    Good,
    Encouragement,
}

impl FeedbackTier {
    /// Classify results. Integer comparison keeps the 80%/50% edges exact.
    pub fn for_results(results: &SessionResults) -> Self {
        let correct = u64::from(results.correct_answers);
        let total = u64::from(results.total_questions);

        if total > 0 && correct == total {
            FeedbackTier::Perfect
        } else if correct * 100 >= total * 80 && total > 0 {
            FeedbackTier::Great
        } else if correct * 100 >= total * 50 && total > 0 {
            FeedbackTier::Good
        } else {
            FeedbackTier::Encouragement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Perfect       => "Excellent! Perfect score!",
            FeedbackTier::Great         => "Great job!",
            FeedbackTier::Good          => "Good effort! Keep practicing.",
            FeedbackTier::Encouragement => "Don't give up! Practice makes perfect.",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Closing message for the summary screen.
pub fn feedback(results: &SessionResults) -> &'static str {
    FeedbackTier::for_results(results).message()
}
