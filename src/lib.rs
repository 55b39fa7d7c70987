//! # times_drill
//!
//! The engine behind a timed multiplication-practice game.
//!
//! A session is configured with a table range, a question limit, a time limit
//! and a game mode. The engine hands out one random multiplication fact at a
//! time, scores answers, tracks streaks, ends the session when either limit
//! is hit, and rates the outcome. Drawing the screen is left to the caller;
//! the engine only exposes state snapshots and change notifications.
//!
//! ## How it works
//!
//! 1. Build [`Settings`] (or parse them from a [`MenuForm`]).
//! 2. Call [`PracticeSession::start`] to get the first [`Problem`].
//! 3. Drive the session with [`PracticeSession::tick`] roughly every 100ms and
//!    [`PracticeSession::submit_answer`] for each answer.
//! 4. When the session ends, show [`summary_view`] or [`feedback`].
//!
//! ## Game modes
//!
//! - `GameMode::Simple`: every problem carries three shuffled options, one of
//!   them correct, for button-style answering.
//! - `GameMode::Normal`: the player types the product.
//!
//! ## Quick start
//!
//! ```rust
//! use times_drill::{feedback, GameMode, PracticeSession, Settings};
//!
//! let mut session = PracticeSession::new();
//! let settings = Settings::new(GameMode::Normal)
//!     .with_max_questions(1)
//!     .with_seed(42);
//!
//! let problem = session.start(settings).unwrap();
//! println!("{problem} = ?");
//!
//! let outcome = session.submit_answer(problem.answer).unwrap();
//! assert!(outcome.correct);
//! assert!(session.is_ended());
//! println!("{}", feedback(&session.results()));
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `times_drill::PracticeSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    feedback, generate, parse_answer, practice_view, resolve_choice, stats_line, summary_view,
    AnswerOutcome, ConfigError, EndReason, FeedbackTier, GameMode, MenuForm, PracticeSession,
    Problem, ProblemGenerator, SessionError, SessionEvent, SessionPhase, SessionResults, Settings,
    TickStatus,
};
