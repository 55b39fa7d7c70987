use serde_json::{json, Value};

use crate::drill_engine::{
    feedback::FeedbackTier,
    models::SessionResults,
    session::PracticeSession,
};

/// Round to one decimal place for display.
fn one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Question number to show; after the last answer the index runs one past
/// the limit, so clamp it.
fn shown_index(session: &PracticeSession) -> u32 {
    session
        .question_index()
        .min(session.settings().max_questions)
}

/// The practice screen's status bar, e.g.
/// `"Q: 3/10 | Time: 25s | Score: 2 | Streak: 2 (best 3)"`.
///
/// Remaining time is floored to whole seconds.
pub fn stats_line(session: &PracticeSession) -> String {
    let results = session.results();
    format!(
        "Q: {}/{} | Time: {}s | Score: {} | Streak: {} (best {})",
        shown_index(session),
        session.settings().max_questions,
        session.remaining_time().floor() as u64,
        results.correct_answers,
        results.current_streak,
        results.best_streak,
    )
}

/// Everything the practice screen renders, as JSON.
pub fn practice_view(session: &PracticeSession) -> Value {
    let settings = session.settings();
    let results = session.results();
    let problem = session.current_problem();

    json!({
        "phase": session.phase().to_string(),
        "question": shown_index(session),
        "max_questions": settings.max_questions,
        "time_limit": settings.time_limit,
        "remaining_time": session.remaining_time().floor() as u64,
        "elapsed_time": one_decimal(results.elapsed_time),
        "score": results.correct_answers,
        "mistakes": results.mistakes,
        "current_streak": results.current_streak,
        "best_streak": results.best_streak,
        "problem": problem.map(|p| p.to_string()),
        "options": problem.and_then(|p| p.options),
        "stats_line": stats_line(session),
        "end_reason": session.end_reason(),
    })
}

/// The summary card shown after a session ends.
pub fn summary_view(results: &SessionResults) -> Value {
    let tier = FeedbackTier::for_results(results);
    json!({
        "correct": results.correct_answers,
        "mistakes": results.mistakes,
        "total": results.total_questions,
        "time": one_decimal(results.elapsed_time),
        "cpm": one_decimal(results.cpm()),
        "accuracy": one_decimal(results.accuracy()),
        "best_streak": results.best_streak,
        "tier": tier,
        "feedback": tier.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::drill_engine::models::{GameMode, Settings};

    #[test]
    fn stats_line_reflects_progress() {
        let t0 = Instant::now();
        let mut session = PracticeSession::new();
        let first = session
            .start_at(Settings::new(GameMode::Normal).with_seed(1), t0)
            .unwrap();
        session
            .submit_answer_at(first.answer, t0 + Duration::from_millis(4_500))
            .unwrap();

        assert_eq!(
            stats_line(&session),
            "Q: 2/10 | Time: 25s | Score: 1 | Streak: 1 (best 1)"
        );
    }

    #[test]
    fn practice_view_has_no_options_in_normal_mode() {
        let mut session = PracticeSession::new();
        session.start(Settings::new(GameMode::Normal).with_seed(2)).unwrap();
        let view = practice_view(&session);
        assert_eq!(view["options"], Value::Null);
        assert_eq!(view["phase"], "in progress");
        assert_eq!(view["end_reason"], Value::Null);
        assert!(view["problem"].as_str().unwrap().contains(" x "));
    }

    #[test]
    fn practice_view_lists_simple_mode_options() {
        let mut session = PracticeSession::new();
        session.start(Settings::new(GameMode::Simple).with_seed(3)).unwrap();
        let view = practice_view(&session);
        assert_eq!(view["options"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn practice_view_reports_end_reason_after_last_answer() {
        let t0 = Instant::now();
        let mut session = PracticeSession::new();
        let settings = Settings::new(GameMode::Normal).with_max_questions(1).with_seed(4);
        let first = session.start_at(settings, t0).unwrap();
        session.submit_answer_at(first.answer, t0 + Duration::from_secs(2)).unwrap();

        let view = practice_view(&session);
        assert_eq!(view["end_reason"], "QuestionLimit");
        assert_eq!(view["phase"], "ended");
        assert_eq!(view["problem"], Value::Null);
        assert_eq!(view["question"], 1);
    }

    #[test]
    fn summary_view_rounds_and_rates() {
        let results = SessionResults {
            total_questions: 10,
            correct_answers: 8,
            mistakes: 2,
            elapsed_time: 24.04,
            current_streak: 3,
            best_streak: 5,
        };
        let view = summary_view(&results);
        assert_eq!(view["correct"], 8);
        assert_eq!(view["time"], 24.0);
        assert_eq!(view["cpm"], 20.0);
        assert_eq!(view["accuracy"], 80.0);
        assert_eq!(view["best_streak"], 5);
        assert_eq!(view["tier"], "Great");
        assert_eq!(view["feedback"], FeedbackTier::Great.message());
    }
}
