use crate::constants::{
    AVERAGE_BLINKING, AVERAGE_BREATHING, AVERAGE_HEARTBEAT, AVERAGE_HUMAN_LIFE,
    CULTURAL_MEMORY_YEARS, DAYS_PER_YEAR, GENERATION_YEARS, MINUTES_PER_DAY,
    PSYCHOLOGICAL_PRESENT_SECONDS,
};

/// Physiological event counts and life-scale ratios accumulated over an
/// elapsed span of years.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HumanPerception {
    pub heartbeats: f64,
    pub breaths: f64,
    pub blinks: f64,
    pub human_generations: f64,
    pub conscious_lives: f64,
    pub active_memory: f64,
    pub psychological_present: f64,
}

/// Total minutes in `years` Julian years.
fn minutes_in(years: f64) -> f64 {
    years * DAYS_PER_YEAR * MINUTES_PER_DAY
}

pub fn years_to_perception(years: f64) -> HumanPerception {
    let minutes = minutes_in(years);
    HumanPerception {
        heartbeats: minutes * AVERAGE_HEARTBEAT,
        breaths: minutes * AVERAGE_BREATHING,
        blinks: minutes * AVERAGE_BLINKING,
        human_generations: years / GENERATION_YEARS,
        conscious_lives: years / AVERAGE_HUMAN_LIFE,
        active_memory: years / CULTURAL_MEMORY_YEARS,
        // Divisor kept as written: 3 "seconds of now" over a Julian year.
        psychological_present: years / (PSYCHOLOGICAL_PRESENT_SECONDS / DAYS_PER_YEAR),
    }
}

/// Seconds between consecutive events at `per_minute` events per minute.
pub fn seconds_per_event(per_minute: f64) -> f64 {
    60.0 / per_minute
}
