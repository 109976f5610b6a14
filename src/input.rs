use crate::constants::*;
use crate::elo::{Competitor, Encounter};
use ordered_float::NotNan;
use tracing::{debug, warn};

/// Positional parameters, in command line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RatingA,
    ActiveA,
    RatingB,
    ActiveB,
    Performance,
    Games,
}

impl Field {
    fn requirement(self) -> &'static str {
        match self {
            Field::RatingA => "Error: A must be a number between 0 and 3000.",
            Field::ActiveA => "Error: aA must be 'true' or 'false'.",
            Field::RatingB => "Error: B must be a number between 0 and 3000.",
            Field::ActiveB => "Error: aB must be 'true' or 'false'.",
            Field::Performance => "Error: q must be a number between 0 and 100.",
            Field::Games => {
                "Error: n must be a positive integer representing the number of games."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error(
        "Usage: elo-adjust <A> <aA> <B> <aB> <q> [<n>]\nExample: elo-adjust 1530 true 1450 true 50 1"
    )]
    MissingArguments,

    #[error("{}", .field.requirement())]
    InvalidNumericFormat { field: Field, value: String },

    #[error("{}", .field.requirement())]
    OutOfRange { field: Field, value: f64 },

    #[error("{}", .field.requirement())]
    InvalidBoolean { field: Field, value: String },

    #[error("Error: For a single game (n = 1), q must be 0 (loss), 50 (draw), or 100 (win).")]
    InconsistentSingleGamePerformance { performance: f64 },
}

impl InputError {
    /// The offending value, if the error is about a single argument.
    pub fn rejected_value(&self) -> Option<String> {
        match self {
            InputError::MissingArguments => None,
            InputError::InvalidNumericFormat { value, .. }
            | InputError::InvalidBoolean { value, .. } => Some(value.clone()),
            InputError::OutOfRange { value, .. } => Some(value.to_string()),
            InputError::InconsistentSingleGamePerformance { performance } => {
                Some(performance.to_string())
            }
        }
    }
}

fn parse_decimal(field: Field, raw: &str, min: f64, max: f64) -> Result<f64, InputError> {
    let value = raw
        .trim()
        .parse::<NotNan<f64>>()
        .map_err(|_| InputError::InvalidNumericFormat {
            field,
            value: raw.to_owned(),
        })?
        .into_inner();
    if !(min..=max).contains(&value) {
        return Err(InputError::OutOfRange { field, value });
    }
    Ok(value)
}

fn parse_flag(field: Field, raw: &str) -> Result<bool, InputError> {
    let raw_trimmed = raw.trim();
    if raw_trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw_trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InputError::InvalidBoolean {
            field,
            value: raw.to_owned(),
        })
    }
}

fn parse_games(raw: &str) -> Result<u32, InputError> {
    let games = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumericFormat {
            field: Field::Games,
            value: raw.to_owned(),
        })?;
    u32::try_from(games)
        .ok()
        .filter(|&games| games >= 1)
        .ok_or(InputError::OutOfRange {
            field: Field::Games,
            value: f64::from(games),
        })
}

impl Encounter {
    /// Builds an encounter, rejecting any value outside its domain. For
    /// multiple games the performance is only range-checked.
    pub fn new(
        first: Competitor,
        second: Competitor,
        performance: f64,
        games: u32,
    ) -> Result<Encounter, InputError> {
        for (field, rating) in [(Field::RatingA, first.rating), (Field::RatingB, second.rating)] {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(InputError::OutOfRange {
                    field,
                    value: rating,
                });
            }
        }
        if !(MIN_PERFORMANCE..=MAX_PERFORMANCE).contains(&performance) {
            return Err(InputError::OutOfRange {
                field: Field::Performance,
                value: performance,
            });
        }
        if games < 1 {
            return Err(InputError::OutOfRange {
                field: Field::Games,
                value: f64::from(games),
            });
        }
        if games == 1 && !SINGLE_GAME_RESULTS.contains(&performance) {
            return Err(InputError::InconsistentSingleGamePerformance { performance });
        }
        Ok(Encounter {
            first,
            second,
            performance,
            games,
        })
    }
}

/// Validates `<A> <aA> <B> <aB> <q> [<n>]` in order, stopping at the first
/// violation.
pub fn parse_encounter<S: AsRef<str>>(args: &[S]) -> Result<Encounter, InputError> {
    let [a, active_a, b, active_b, q, rest @ ..] = args else {
        return Err(InputError::MissingArguments);
    };

    let first = Competitor {
        rating: parse_decimal(Field::RatingA, a.as_ref(), MIN_RATING, MAX_RATING)?,
        active: parse_flag(Field::ActiveA, active_a.as_ref())?,
    };
    let second = Competitor {
        rating: parse_decimal(Field::RatingB, b.as_ref(), MIN_RATING, MAX_RATING)?,
        active: parse_flag(Field::ActiveB, active_b.as_ref())?,
    };
    let performance = parse_decimal(
        Field::Performance,
        q.as_ref(),
        MIN_PERFORMANCE,
        MAX_PERFORMANCE,
    )?;
    let games = match rest.first() {
        Some(n) => parse_games(n.as_ref())?,
        None => DEFAULT_GAMES,
    };
    if rest.len() > 1 {
        warn!(ignored = rest.len() - 1, "ignoring extra arguments");
    }

    let encounter = Encounter::new(first, second, performance, games)?;
    debug!(?encounter, "validated input");
    Ok(encounter)
}
