//! Derived analyses built on the scale and perception conversions: universe
//! age, future projections and relative temporal velocity.

use crate::constants::{
    AVERAGE_HUMAN_LIFE, DAYS_PER_YEAR, GENERATION_YEARS, SECONDS_PER_DAY,
    WRITTEN_HISTORY_YEARS, YEARS_PER_COSMIC_DAY, YEARS_PER_DIVINE_DAY,
};
use crate::perception::years_to_perception;
use crate::scales::{TemporalScales, years_to_scales};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniverseAge {
    pub years: f64,
    pub cosmic_days: f64,
    pub divine_days: f64,
    pub human_lives: f64,
    pub generations: f64,
    /// How many times written history fits in the universe's age.
    pub written_history_ratio: f64,
    pub heartbeats: f64,
}

pub fn universe_age(years: f64) -> UniverseAge {
    UniverseAge {
        years,
        cosmic_days: years / YEARS_PER_COSMIC_DAY,
        divine_days: years / YEARS_PER_DIVINE_DAY,
        human_lives: years / AVERAGE_HUMAN_LIFE,
        generations: years / GENERATION_YEARS,
        written_history_ratio: years / WRITTEN_HISTORY_YEARS,
        heartbeats: years_to_perception(years).heartbeats,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub delta_years: f64,
    pub total_years: f64,
    pub scales: TemporalScales,
}

/// Project `baseline` forward by each of `deltas`, preserving order.
pub fn project(baseline: f64, deltas: &[f64]) -> Vec<Projection> {
    deltas
        .iter()
        .map(|&delta_years| {
            let total_years = baseline + delta_years;
            Projection {
                delta_years,
                total_years,
                scales: years_to_scales(total_years),
            }
        })
        .collect()
}

/// How fast the synthetic timelines run relative to human time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalVelocity {
    pub cosmic_seconds_per_second: f64,
    pub divine_seconds_per_second: f64,
    /// `YEARS_PER_COSMIC_DAY * DAYS_PER_YEAR / SECONDS_PER_DAY`, reported as
    /// human years per cosmic second.
    pub cosmic_second_in_years: f64,
    pub divine_second_in_years: f64,
}

pub fn temporal_velocity() -> TemporalVelocity {
    let seconds_per_year = DAYS_PER_YEAR * SECONDS_PER_DAY;
    TemporalVelocity {
        cosmic_seconds_per_second: 1.0 / (YEARS_PER_COSMIC_DAY * seconds_per_year),
        divine_seconds_per_second: 1.0 / (YEARS_PER_DIVINE_DAY * seconds_per_year),
        cosmic_second_in_years: YEARS_PER_COSMIC_DAY * DAYS_PER_YEAR / SECONDS_PER_DAY,
        divine_second_in_years: YEARS_PER_DIVINE_DAY * DAYS_PER_YEAR / SECONDS_PER_DAY,
    }
}
