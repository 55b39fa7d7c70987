//! Core drill engine: problem generation, session state, and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: settings, problems, results, events |
//! | `error`     | `ConfigError` and `SessionError` |
//! | `generator` | Random multiplication facts and Simple-mode decoy options |
//! | `session`   | `PracticeSession`, the start/tick/answer/abort state machine |
//! | `feedback`  | Maps final results to a feedback tier and message |
//! | `input`     | Parses raw answer text and menu fields |
//! | `view`      | Status line and JSON views for a presentation layer |

pub mod error;
pub mod feedback;
pub mod generator;
pub mod input;
pub mod models;
pub mod session;
pub mod view;

pub use error::{ConfigError, SessionError};
pub use feedback::{feedback, FeedbackTier};
pub use generator::{generate, ProblemGenerator};
pub use input::{parse_answer, resolve_choice, MenuForm};
pub use models::{
    AnswerOutcome, EndReason, GameMode, Problem, SessionEvent, SessionPhase, SessionResults,
    Settings, TickStatus,
};
pub use session::PracticeSession;
pub use view::{practice_view, stats_line, summary_view};
