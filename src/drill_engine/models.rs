use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::ConfigError;

/// Largest table range whose products (plus decoy offsets) still fit in `u32`.
pub const MAX_TABLE_RANGE: u32 = 65_535;

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// How the player answers: pick from three buttons, or type the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Simple,
    Normal,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Simple => write!(f, "Simple (Buttons)"),
            GameMode::Normal => write!(f, "Normal (Typing)"),
        }
    }
}

/// Parameters of one practice session. Copied into the session on start and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Upper bound (inclusive) for both factors.
    pub table_range: u32,
    pub max_questions: u32,
    /// Session length in whole seconds.
    pub time_limit: u32,
    pub game_mode: GameMode,
    /// `Some` makes problem generation reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            table_range: 10,
            max_questions: 10,
            time_limit: 30,
            game_mode: GameMode::Simple,
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Default settings in the given mode.
    pub fn new(game_mode: GameMode) -> Self {
        Settings { game_mode, ..Settings::default() }
    }

    pub fn with_table_range(mut self, table_range: u32) -> Self {
        self.table_range = table_range;
        self
    }

    pub fn with_max_questions(mut self, max_questions: u32) -> Self {
        self.max_questions = max_questions;
        self
    }

    pub fn with_time_limit(mut self, time_limit: u32) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_range == 0 {
            return Err(ConfigError::Zero("table_range"));
        }
        if self.table_range > MAX_TABLE_RANGE {
            return Err(ConfigError::TableRangeTooLarge(self.table_range));
        }
        if self.max_questions == 0 {
            return Err(ConfigError::Zero("max_questions"));
        }
        if self.time_limit == 0 {
            return Err(ConfigError::Zero("time_limit"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// One multiplication fact shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub factor_a: u32,
    pub factor_b: u32,
    pub answer: u32,
    /// Three distinct choices containing `answer`; only present in Simple mode.
    pub options: Option<[u32; 3]>,
}

impl Problem {
    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.factor_a, self.factor_b)
    }
}

// ---------------------------------------------------------------------------
// Results and session lifecycle
// ---------------------------------------------------------------------------

/// Running tally for a session. Reset on start, frozen once the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionResults {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub mistakes: u32,
    /// Seconds since start.
    pub elapsed_time: f64,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl SessionResults {
    /// Correct answers per minute; 0 before any time has passed.
    pub fn cpm(&self) -> f64 {
        if self.elapsed_time > 0.0 {
            self.correct_answers as f64 / self.elapsed_time * 60.0
        } else {
            0.0
        }
    }

    /// Percentage of answered questions that were correct; 0 if none answered.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.total_questions as f64 * 100.0
    }

    pub(crate) fn record(&mut self, correct: bool) {
        self.total_questions += 1;
        if correct {
            self.correct_answers += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.mistakes += 1;
            self.current_streak = 0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Ended,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::NotStarted => write!(f, "not started"),
            SessionPhase::InProgress => write!(f, "in progress"),
            SessionPhase::Ended      => write!(f, "ended"),
        }
    }
}

/// Why a session reached `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    QuestionLimit,
    TimeLimit,
    Aborted,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::QuestionLimit => write!(f, "question limit reached"),
            EndReason::TimeLimit     => write!(f, "time is up"),
            EndReason::Aborted       => write!(f, "aborted"),
        }
    }
}

/// Returned by every timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStatus {
    /// Seconds left, never negative.
    pub remaining_time: f64,
    pub is_ended: bool,
}

/// Returned for every accepted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The answer the player should have given.
    pub expected: u32,
    pub results: SessionResults,
    /// `None` when this answer ended the session.
    pub next_problem: Option<Problem>,
}

/// Notifications delivered to the registered listener after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started { settings: Settings },
    ProblemPresented { index: u32, problem: Problem },
    Answered { correct: bool, results: SessionResults },
    Ticked { remaining_time: f64 },
    Ended { reason: EndReason, results: SessionResults },
}
