pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 3000.0;

pub const MIN_PERFORMANCE: f64 = 0.0;
pub const MAX_PERFORMANCE: f64 = 100.0;

/// The only performances a single game can produce: loss, draw, win.
pub const SINGLE_GAME_RESULTS: [f64; 3] = [0.0, 50.0, 100.0];

pub const DEFAULT_GAMES: u32 = 1;

pub const FULL_WEIGHT_GAMES: f64 = 20.0;

pub const RATING_SCALE: f64 = 8.0;
/// Gap at which the expected performance reaches 10:1 odds.
pub const GAP_STEP: f64 = 50.0;

pub const LOG_ENV: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";
