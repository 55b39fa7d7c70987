//! Input boundary: raw text from the menu form and the answer box.
//!
//! Nothing non-numeric reaches the session. Answers that fail `parse_answer`
//! are dropped by the caller; menu fields that fail become `ConfigError`s.

use std::ops::RangeInclusive;

use crate::drill_engine::{
    error::ConfigError,
    models::{GameMode, Settings},
};

pub const TABLE_RANGE_BOUNDS: RangeInclusive<u32> = 1..=50;
pub const QUESTION_BOUNDS: RangeInclusive<u32> = 1..=100;
pub const TIME_LIMIT_BOUNDS: RangeInclusive<u32> = 5..=300;

/// Parse a typed answer. Only plain ASCII digits are accepted (surrounding
/// whitespace is ignored); signs, decimals and overflow yield `None`.
pub fn parse_answer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Interpret a typed number against Simple-mode options.
///
/// A number that is itself one of the options is taken literally. Otherwise
/// `1`..`3` select an option by position. Anything else, or any number in
/// Normal mode, passes through unchanged.
pub fn resolve_choice(value: u32, options: Option<[u32; 3]>) -> u32 {
    match options {
        Some(opts) if !opts.contains(&value) && (1..=3).contains(&value) => {
            opts[value as usize - 1]
        }
        _ => value,
    }
}

/// Parse a mode label as shown in the menu's dropdown. Matching is loose:
/// anything mentioning "simple" or "normal" is accepted.
pub fn parse_mode(raw: &str) -> Result<GameMode, ConfigError> {
    let lower = raw.trim().to_ascii_lowercase();
    if lower.contains("simple") {
        Ok(GameMode::Simple)
    } else if lower.contains("normal") {
        Ok(GameMode::Normal)
    } else {
        Err(ConfigError::UnknownMode(raw.to_string()))
    }
}

fn parse_bounded(
    field: &'static str,
    raw: &str,
    bounds: &RangeInclusive<u32>,
) -> Result<u32, ConfigError> {
    let value = parse_answer(raw).ok_or_else(|| ConfigError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !bounds.contains(&value) {
        return Err(ConfigError::OutOfBounds {
            field,
            value,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }
    Ok(value)
}

/// Raw contents of the settings menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuForm {
    pub table_range: String,
    pub questions: String,
    pub time_limit: String,
    pub mode: String,
}

impl Default for MenuForm {
    fn default() -> Self {
        let defaults = Settings::default();
        MenuForm {
            table_range: defaults.table_range.to_string(),
            questions: defaults.max_questions.to_string(),
            time_limit: defaults.time_limit.to_string(),
            mode: defaults.game_mode.to_string(),
        }
    }
}

impl MenuForm {
    /// Validate every field against the menu bounds and build `Settings`.
    /// The first failing field is reported.
    pub fn to_settings(&self) -> Result<Settings, ConfigError> {
        let settings = Settings {
            table_range: parse_bounded("table_range", &self.table_range, &TABLE_RANGE_BOUNDS)?,
            max_questions: parse_bounded("questions", &self.questions, &QUESTION_BOUNDS)?,
            time_limit: parse_bounded("time_limit", &self.time_limit, &TIME_LIMIT_BOUNDS)?,
            game_mode: parse_mode(&self.mode)?,
            rng_seed: None,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_must_be_plain_digits() {
        assert_eq!(parse_answer("42"), Some(42));
        assert_eq!(parse_answer(" 7 \n"), Some(7));
        assert_eq!(parse_answer("0"), Some(0));
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("-3"), None);
        assert_eq!(parse_answer("+3"), None);
        assert_eq!(parse_answer("4.5"), None);
        assert_eq!(parse_answer("abc"), None);
        assert_eq!(parse_answer("99999999999"), None);
    }

    #[test]
    fn small_numbers_pick_options_by_position() {
        assert_eq!(resolve_choice(1, Some([12, 14, 9])), 12);
        assert_eq!(resolve_choice(3, Some([12, 14, 9])), 9);
        assert_eq!(resolve_choice(14, Some([12, 14, 9])), 14);
        assert_eq!(resolve_choice(2, None), 2);
    }

    #[test]
    fn option_values_win_over_positions() {
        // 1 x 2 = 2: typing 2 means the value, not the second button.
        assert_eq!(resolve_choice(2, Some([3, 1, 2])), 2);
        assert_eq!(resolve_choice(1, Some([3, 1, 2])), 1);
        // 4 is not an option but is outside 1..=3, so it stays literal.
        assert_eq!(resolve_choice(4, Some([3, 1, 2])), 4);
        // 3 is not an option here, so it picks the third button.
        assert_eq!(resolve_choice(3, Some([6, 7, 5])), 5);
    }

    #[test]
    fn default_form_yields_default_settings() {
        assert_eq!(MenuForm::default().to_settings(), Ok(Settings::default()));
    }

    #[test]
    fn normal_mode_label_is_recognised() {
        let form = MenuForm { mode: "Normal (Typing)".into(), ..MenuForm::default() };
        assert_eq!(form.to_settings().unwrap().game_mode, GameMode::Normal);
        assert!(matches!(parse_mode("hard"), Err(ConfigError::UnknownMode(_))));
    }

    #[test]
    fn out_of_bounds_fields_are_rejected() {
        let form = MenuForm { time_limit: "3".into(), ..MenuForm::default() };
        assert_eq!(
            form.to_settings(),
            Err(ConfigError::OutOfBounds { field: "time_limit", value: 3, min: 5, max: 300 })
        );

        let form = MenuForm { table_range: "0".into(), ..MenuForm::default() };
        assert!(matches!(
            form.to_settings(),
            Err(ConfigError::OutOfBounds { field: "table_range", .. })
        ));
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let form = MenuForm { questions: "ten".into(), ..MenuForm::default() };
        assert!(matches!(
            form.to_settings(),
            Err(ConfigError::NotANumber { field: "questions", .. })
        ));
    }
}
