//! The practice session state machine.
//!
//! A session moves `NotStarted -> InProgress -> Ended` and never leaves
//! `Ended`. Two kinds of input drive it: periodic timer ticks and answer
//! submissions. Both take `&mut self`, so the owner serialises them; nothing
//! here blocks or spawns.
//!
//! Every time-dependent call has an `_at` / explicit-`Instant` form so callers
//! (and tests) control the clock. The plain forms read `Instant::now()`.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::drill_engine::{
    error::SessionError,
    generator::ProblemGenerator,
    models::{
        AnswerOutcome, EndReason, Problem, SessionEvent, SessionPhase, SessionResults,
        Settings, TickStatus,
    },
};

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// One player's practice run. Reusable: a new session may be started once the
/// previous one has ended.
pub struct PracticeSession {
    settings: Settings,
    phase: SessionPhase,
    results: SessionResults,
    question_index: u32,
    started_at: Option<Instant>,
    current: Option<Problem>,
    end_reason: Option<EndReason>,
    generator: ProblemGenerator,
    listener: Option<Listener>,
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PracticeSession {
    pub fn new() -> Self {
        PracticeSession {
            settings: Settings::default(),
            phase: SessionPhase::NotStarted,
            results: SessionResults::default(),
            question_index: 0,
            started_at: None,
            current: None,
            end_reason: None,
            generator: ProblemGenerator::new(None),
            listener: None,
        }
    }

    /// Register the callback invoked after every state change. Replaces any
    /// previous listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    // ── accessors ────────────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Snapshot of the running (or final) tally.
    pub fn results(&self) -> SessionResults {
        self.results
    }

    /// 1-based index of the question on screen; `max_questions + 1` after the
    /// last answer.
    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Seconds left as of the last clock update.
    pub fn remaining_time(&self) -> f64 {
        (f64::from(self.settings.time_limit) - self.results.elapsed_time).max(0.0)
    }

    // ── operations ───────────────────────────────────────────────────────────

    pub fn start(&mut self, settings: Settings) -> Result<Problem, SessionError> {
        self.start_at(settings, Instant::now())
    }

    /// Reset all counters, record `now` as the start and present question 1.
    ///
    /// Fails with `AlreadyRunning` while a session is in progress, and with
    /// `Config` if `settings` do not validate.
    pub fn start_at(&mut self, settings: Settings, now: Instant) -> Result<Problem, SessionError> {
        if self.phase == SessionPhase::InProgress {
            return Err(SessionError::AlreadyRunning);
        }
        settings.validate()?;

        self.settings = settings;
        self.phase = SessionPhase::InProgress;
        self.results = SessionResults::default();
        self.question_index = 1;
        self.started_at = Some(now);
        self.end_reason = None;
        self.generator = ProblemGenerator::new(settings.rng_seed);

        info!(
            table_range = settings.table_range,
            max_questions = settings.max_questions,
            time_limit = settings.time_limit,
            mode = ?settings.game_mode,
            "practice session started"
        );
        self.emit(SessionEvent::Started { settings });

        Ok(self.present_next())
    }

    pub fn tick_now(&mut self) -> Result<TickStatus, SessionError> {
        self.tick(Instant::now())
    }

    /// Recompute elapsed time and end the session once the limit is reached.
    ///
    /// Once ended, further ticks only report the frozen state.
    pub fn tick(&mut self, now: Instant) -> Result<TickStatus, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Ended => {
                return Ok(TickStatus { remaining_time: self.remaining_time(), is_ended: true });
            }
            SessionPhase::InProgress => {}
        }

        if self.advance_clock(now) {
            self.finish(EndReason::TimeLimit);
            return Ok(TickStatus { remaining_time: 0.0, is_ended: true });
        }

        let remaining_time = self.remaining_time();
        trace!(remaining_time, "tick");
        self.emit(SessionEvent::Ticked { remaining_time });
        Ok(TickStatus { remaining_time, is_ended: false })
    }

    pub fn submit_answer(&mut self, value: u32) -> Result<AnswerOutcome, SessionError> {
        self.submit_answer_at(value, Instant::now())
    }

    /// Score `value` against the current problem and move to the next one.
    ///
    /// The clock is checked first: an answer arriving after the time limit
    /// ends the session by timeout and is rejected with `Ended`. Answers
    /// after the session ended never touch the results.
    pub fn submit_answer_at(&mut self, value: u32, now: Instant) -> Result<AnswerOutcome, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Ended      => return Err(SessionError::Ended),
            SessionPhase::InProgress => {}
        }

        if self.advance_clock(now) {
            self.finish(EndReason::TimeLimit);
            return Err(SessionError::Ended);
        }

        let Some(problem) = self.current else {
            unreachable!("in-progress session has no current problem");
        };

        let correct = problem.is_correct(value);
        self.results.record(correct);
        self.question_index += 1;

        debug!(
            problem = %problem,
            value,
            correct,
            streak = self.results.current_streak,
            "answer scored"
        );
        self.emit(SessionEvent::Answered { correct, results: self.results });

        let next_problem = if self.question_index > self.settings.max_questions {
            self.finish(EndReason::QuestionLimit);
            None
        } else {
            Some(self.present_next())
        };

        Ok(AnswerOutcome {
            correct,
            expected: problem.answer,
            results: self.results,
            next_problem,
        })
    }

    pub fn abort(&mut self) -> Result<SessionResults, SessionError> {
        self.abort_at(Instant::now())
    }

    /// Stop early, keeping everything scored so far. Elapsed time freezes at
    /// `now`. If the time limit had already passed, the session ends by
    /// timeout instead. Aborting an ended session just returns its results.
    pub fn abort_at(&mut self, now: Instant) -> Result<SessionResults, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => Err(SessionError::NotStarted),
            SessionPhase::Ended      => Ok(self.results),
            SessionPhase::InProgress => {
                let reason = if self.advance_clock(now) {
                    EndReason::TimeLimit
                } else {
                    EndReason::Aborted
                };
                self.finish(reason);
                Ok(self.results)
            }
        }
    }

    // ── internals ────────────────────────────────────────────────────────────

    /// Update `elapsed_time` (clamped to the limit). Returns true when the
    /// limit has been reached.
    fn advance_clock(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let limit = f64::from(self.settings.time_limit);
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        self.results.elapsed_time = elapsed.min(limit);
        elapsed >= limit
    }

    fn present_next(&mut self) -> Problem {
        let problem = self
            .generator
            .generate(self.settings.table_range, self.settings.game_mode);
        self.current = Some(problem);

        debug!(index = self.question_index, problem = %problem, "problem presented");
        self.emit(SessionEvent::ProblemPresented { index: self.question_index, problem });
        problem
    }

    fn finish(&mut self, reason: EndReason) {
        self.phase = SessionPhase::Ended;
        self.current = None;
        self.end_reason = Some(reason);

        info!(
            %reason,
            correct = self.results.correct_answers,
            total = self.results.total_questions,
            best_streak = self.results.best_streak,
            elapsed = self.results.elapsed_time,
            "practice session ended"
        );
        self.emit(SessionEvent::Ended { reason, results: self.results });
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }
}
