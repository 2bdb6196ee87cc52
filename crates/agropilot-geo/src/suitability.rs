// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure threshold scoring of a weather reading for soybean cultivation.

use agropilot_core::WeatherReading;
use serde::{Deserialize, Serialize};

/// Ideal air temperature range for soybean growth, in degrees Celsius.
pub const TEMP_RANGE_C: (f64, f64) = (20.0, 30.0);

/// Suitable relative humidity range, in percent.
pub const HUMIDITY_RANGE_PCT: (f64, f64) = (40.0, 80.0);

/// Pass/fail climate assessment for growing soybeans at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityVerdict {
    /// True iff both temperature and humidity fall in range. No partial
    /// credit, no weighting.
    pub suitable: bool,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    /// One human-readable line per criterion, pass or fail phrasing.
    pub recommendations: Vec<String>,
    pub location_label: String,
}

/// Outcome of a location analysis: a scored verdict, or an explicit
/// unavailable report when no usable weather reading exists. The scorer
/// never guesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SuitabilityOutcome {
    Assessed(SuitabilityVerdict),
    Unavailable {
        reason: String,
        recommendations: Vec<String>,
    },
}

impl SuitabilityOutcome {
    /// The fixed report used when the weather lookup yields nothing usable.
    pub fn weather_unavailable() -> Self {
        Self::Unavailable {
            reason: "Weather data unavailable".to_string(),
            recommendations: vec!["Check your internet connection and try again".to_string()],
        }
    }
}

/// Score a weather reading against the fixed soybean thresholds.
///
/// Suitable iff `20 <= temp_c <= 30` and `40 <= humidity <= 80`; each
/// criterion contributes one recommendation line regardless of outcome.
pub fn assess_suitability(reading: &WeatherReading, location_label: &str) -> SuitabilityVerdict {
    let temperature_c = reading.temperature_celsius();
    let humidity_pct = reading.humidity_pct;

    let temp_suitable = (TEMP_RANGE_C.0..=TEMP_RANGE_C.1).contains(&temperature_c);
    let humidity_suitable = (HUMIDITY_RANGE_PCT.0..=HUMIDITY_RANGE_PCT.1).contains(&humidity_pct);

    let mut recommendations = Vec::with_capacity(2);

    if temp_suitable {
        recommendations.push("Temperature is ideal for soybean growth".to_string());
    } else {
        recommendations.push(format!(
            "Temperature ({temperature_c:.1}°C) is outside ideal range (20-30°C)"
        ));
    }

    if humidity_suitable {
        recommendations.push("Humidity levels are suitable".to_string());
    } else {
        recommendations.push(format!(
            "Humidity ({humidity_pct:.0}%) may affect soybean growth"
        ));
    }

    SuitabilityVerdict {
        suitable: temp_suitable && humidity_suitable,
        temperature_c,
        humidity_pct,
        rainfall_mm: reading.rainfall_mm,
        recommendations,
        location_label: location_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp_c: f64, humidity: f64) -> WeatherReading {
        WeatherReading {
            temperature_k: temp_c + 273.15,
            humidity_pct: humidity,
            rainfall_mm: 0.0,
        }
    }

    #[test]
    fn ideal_conditions_are_suitable() {
        let verdict = assess_suitability(&reading(25.0, 60.0), "Test Farm");
        assert!(verdict.suitable);
        assert_eq!(verdict.recommendations.len(), 2);
        assert_eq!(
            verdict.recommendations[0],
            "Temperature is ideal for soybean growth"
        );
        assert_eq!(verdict.recommendations[1], "Humidity levels are suitable");
    }

    #[test]
    fn hot_conditions_fail_with_temperature_recommendation() {
        let verdict = assess_suitability(&reading(35.0, 60.0), "Test Farm");
        assert!(!verdict.suitable);
        assert!(verdict.recommendations[0].contains("outside ideal range (20-30°C)"));
        assert!(verdict.recommendations[0].contains("35.0°C"));
    }

    #[test]
    fn dry_conditions_fail_with_humidity_recommendation() {
        let verdict = assess_suitability(&reading(25.0, 30.0), "Test Farm");
        assert!(!verdict.suitable);
        assert!(verdict.recommendations[1].contains("Humidity (30%)"));
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        assert!(assess_suitability(&reading(20.0, 40.0), "").suitable);
        assert!(assess_suitability(&reading(30.0, 80.0), "").suitable);
        assert!(!assess_suitability(&reading(19.9, 60.0), "").suitable);
        assert!(!assess_suitability(&reading(25.0, 80.1), "").suitable);
    }

    #[test]
    fn both_criteria_must_pass() {
        let verdict = assess_suitability(&reading(35.0, 90.0), "");
        assert!(!verdict.suitable);
        assert!(verdict.recommendations[0].contains("outside ideal range"));
        assert!(verdict.recommendations[1].contains("may affect"));
    }

    #[test]
    fn verdict_carries_location_and_rainfall() {
        let mut r = reading(25.0, 60.0);
        r.rainfall_mm = 2.5;
        let verdict = assess_suitability(&r, "Lilongwe, Malawi");
        assert_eq!(verdict.location_label, "Lilongwe, Malawi");
        assert_eq!(verdict.rainfall_mm, 2.5);
    }

    #[test]
    fn unavailable_outcome_has_fixed_reason() {
        let outcome = SuitabilityOutcome::weather_unavailable();
        match outcome {
            SuitabilityOutcome::Unavailable { reason, recommendations } => {
                assert_eq!(reason, "Weather data unavailable");
                assert_eq!(recommendations.len(), 1);
            }
            SuitabilityOutcome::Assessed(_) => panic!("expected unavailable"),
        }
    }
}
