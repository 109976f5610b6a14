use crate::elo::{Adjustment, Checks, Encounter};
use color_eyre::eyre::Result;
use serde::Serialize;
use std::io::Write;

pub fn write_text(out: &mut impl Write, adjustment: &Adjustment) -> Result<()> {
    let Encounter {
        first,
        second,
        performance,
        games,
    } = adjustment.encounter;
    let (ka, kb) = adjustment.coefficients;
    let (rounded_first, rounded_second) = adjustment.rounded();
    let checks = adjustment.checks();

    writeln!(out, "Initial Ratings: A = {}, B = {}", first.rating, second.rating)?;
    writeln!(out, "Active Status: aA = {}, aB = {}", first.active, second.active)?;
    writeln!(out, "Game Result (Actual Performance): q = {performance}")?;
    writeln!(out, "Number of Games Played: n = {games}")?;
    writeln!(out, "Grade Difference d: {}", adjustment.gap)?;
    writeln!(out, "Coefficients: ka = {ka}, kb = {kb}")?;
    writeln!(out, "Expected Performance p: {}", adjustment.expected)?;
    writeln!(out, "Adjusted Rating An: {rounded_first}")?;
    writeln!(out, "Adjusted Rating Bn: {rounded_second}")?;
    writeln!(out, "Adjustment factor K: {}", adjustment.damping)?;
    writeln!(
        out,
        "K <= 1 check (no grade stretching): {}",
        checks.damping_capped
    )?;
    writeln!(
        out,
        "Sum of rating changes check (no grade stretching): {}",
        checks.zero_sum
    )?;
    writeln!(out, "Total grade preservation check: {}", checks.conserves_total)?;
    Ok(())
}

#[derive(Serialize)]
struct Rounded {
    first: f64,
    second: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a Encounter,
    adjustment: &'a Adjustment,
    rounded: Rounded,
    checks: Checks,
}

pub fn write_json(out: &mut impl Write, adjustment: &Adjustment) -> Result<()> {
    let (first, second) = adjustment.rounded();
    let report = JsonReport {
        input: &adjustment.encounter,
        adjustment,
        rounded: Rounded { first, second },
        checks: adjustment.checks(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elo::{update_ratings, Competitor};
    use serde_json::Value;

    fn adjustment() -> Adjustment {
        update_ratings(&Encounter {
            first: Competitor {
                rating: 1500.0,
                active: true,
            },
            second: Competitor {
                rating: 1500.0,
                active: true,
            },
            performance: 100.0,
            games: 1,
        })
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_text(&mut out, &adjustment()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Initial Ratings: A = 1500, B = 1500",
                "Active Status: aA = true, aB = true",
                "Game Result (Actual Performance): q = 100",
                "Number of Games Played: n = 1",
                "Grade Difference d: 0",
                "Coefficients: ka = 0.5, kb = 0.5",
                "Expected Performance p: 50",
                "Adjusted Rating An: 1510",
                "Adjusted Rating Bn: 1490",
                "Adjustment factor K: 0.05",
                "K <= 1 check (no grade stretching): true",
                "Sum of rating changes check (no grade stretching): true",
                "Total grade preservation check: true",
            ]
        );
    }

    #[test]
    fn test_tiny_loss_rounds_to_unsigned_zero() {
        let adjustment = update_ratings(&Encounter {
            first: Competitor {
                rating: 0.0,
                active: true,
            },
            second: Competitor {
                rating: 3000.0,
                active: true,
            },
            performance: 0.0,
            games: 1,
        });
        assert!(adjustment.first < 0.0);

        let mut out = Vec::new();
        write_text(&mut out, &adjustment).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Adjusted Rating An: 0\n"), "{text}");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &adjustment()).unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["input"]["first"]["rating"], 1500.0);
        assert_eq!(json["input"]["games"], 1);
        assert_eq!(json["adjustment"]["expected"], 50.0);
        assert_eq!(json["adjustment"]["coefficients"][1], 0.5);
        assert_eq!(json["rounded"]["first"], 1510.0);
        assert_eq!(json["rounded"]["second"], 1490.0);
        assert_eq!(json["checks"]["conserves_total"], true);
        assert!(json["adjustment"].get("encounter").is_none());
    }
}
