use crate::constants::*;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Competitor {
    pub rating: f64,
    pub active: bool,
}

/// One validated rating period between two competitors. `performance` is the
/// first competitor's score over all `games`, on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Encounter {
    pub first: Competitor,
    pub second: Competitor,
    pub performance: f64,
    pub games: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Both,
    Neither,
    OnlyFirst,
    OnlySecond,
}

impl Activity {
    pub fn new(first_active: bool, second_active: bool) -> Activity {
        match (first_active, second_active) {
            (true, true) => Activity::Both,
            (false, false) => Activity::Neither,
            (true, false) => Activity::OnlyFirst,
            (false, true) => Activity::OnlySecond,
        }
    }

    /// Share of the rating change applied to `(first, second)`.
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            Activity::Both => (0.5, 0.5),
            Activity::Neither => (0.0, 0.0),
            Activity::OnlyFirst => (1.0, 0.0),
            Activity::OnlySecond => (0.0, 1.0),
        }
    }
}

/// Never exceeds 1, so repeated invocations cannot stretch ratings apart.
pub fn damping_factor(games: u32) -> f64 {
    (f64::from(games) / FULL_WEIGHT_GAMES).min(1.0)
}

pub fn rating_gap(first: f64, second: f64) -> f64 {
    (first - second) / RATING_SCALE
}

/// Expected performance of the stronger side of `gap`, on a 0-100 scale.
pub fn expected_performance(gap: f64) -> f64 {
    MAX_PERFORMANCE / (1.0 + 10.0_f64.powf(-gap / GAP_STEP))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    #[serde(skip)]
    pub encounter: Encounter,
    pub gap: f64,
    pub coefficients: (f64, f64),
    pub expected: f64,
    pub damping: f64,
    pub first: f64,
    pub second: f64,
}

pub fn update_ratings(encounter: &Encounter) -> Adjustment {
    let Encounter {
        first,
        second,
        performance: q,
        games,
    } = *encounter;

    let damping = damping_factor(games);
    let gap = rating_gap(first.rating, second.rating);
    let (ka, kb) = Activity::new(first.active, second.active).coefficients();
    let p = expected_performance(gap);
    debug!(damping, gap, ka, kb, expected = p, "derived update parameters");

    let new_first = first.rating + damping * ka * (q - p) * RATING_SCALE;
    let new_second = second.rating
        + damping * kb * ((MAX_PERFORMANCE - q) - (MAX_PERFORMANCE - p)) * RATING_SCALE;
    debug!(first = new_first, second = new_second, "adjusted ratings");

    Adjustment {
        encounter: *encounter,
        gap,
        coefficients: (ka, kb),
        expected: p,
        damping,
        first: new_first,
        second: new_second,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checks {
    pub damping_capped: bool,
    pub zero_sum: bool,
    pub conserves_total: bool,
}

impl Adjustment {
    pub fn rounded(&self) -> (f64, f64) {
        (round_half_even(self.first), round_half_even(self.second))
    }

    pub fn checks(&self) -> Checks {
        let Encounter {
            first,
            second,
            performance,
            ..
        } = self.encounter;

        let moved = (self.first - first.rating) + (second.rating - self.second);
        let predicted = self.damping * (performance - self.expected) * RATING_SCALE;

        Checks {
            damping_capped: self.damping <= 1.0,
            zero_sum: round_to(moved, 2) == round_to(predicted, 2),
            conserves_total: round_half_even(first.rating + second.rating)
                == round_half_even(self.first + self.second),
        }
    }
}

/// Rounds to the nearest integer, halves to even. Never yields `-0`.
pub fn round_half_even(x: f64) -> f64 {
    x.round_ties_even() + 0.0
}

pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10.0_f64.powi(places);
    (x * scale).round_ties_even() / scale
}
