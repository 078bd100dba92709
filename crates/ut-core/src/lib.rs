//! Universal time calculator engine.
//!
//! Converts elapsed human years into two synthetic timelines: cosmic days
//! (1 day = 1000 years) and divine days (1 day = 50000 years). Also derives
//! physiological event counts, chronology offsets, universe-age ratios and
//! future projections.
//!
//! Zero I/O apart from reading the system clock in [`time`].

pub mod analysis;
pub mod calendar;
pub mod constants;
pub mod error;
pub mod perception;
pub mod scales;
pub mod time;

pub use analysis::{
    Projection, TemporalVelocity, UniverseAge, project, temporal_velocity, universe_age,
};
pub use calendar::{
    CHRONOLOGIES, CalendarAlternative, Chronology, calendar_offset, compare_chronologies,
    to_hebrew_year, to_hijri_year, to_ussher_year, years_since_mark,
};
pub use constants::{
    CREATION_ADAM_AC, CURRENT_YEAR, PROJECTION_DELTAS, UNIVERSE_AGE_YEARS, YEARS_PER_COSMIC_DAY,
    YEARS_PER_DIVINE_DAY,
};
pub use error::ClockError;
pub use perception::{HumanPerception, seconds_per_event, years_to_perception};
pub use scales::{DayBreakdown, TemporalScales, years_to_scales};
pub use time::{CivilDateTime, now_unix_secs, unix_to_iso8601};
