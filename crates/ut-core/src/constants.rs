/// Human years in one cosmic day.
pub const YEARS_PER_COSMIC_DAY: f64 = 1000.0;

/// Human years in one divine day.
pub const YEARS_PER_DIVINE_DAY: f64 = 50000.0;

/// Fixed reference year used to anchor elapsed-years computations.
pub const CURRENT_YEAR: i32 = 2024;

/// Years between Adam's creation and year 0 (Islamic chronology).
pub const CREATION_ADAM_AC: i32 = 3800;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Julian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Average human lifespan in years.
pub const AVERAGE_HUMAN_LIFE: f64 = 78.0;

/// Years per human generation.
pub const GENERATION_YEARS: f64 = 25.0;

/// Span of active cultural memory (3-4 generations).
pub const CULTURAL_MEMORY_YEARS: f64 = 100.0;

/// Length of the psychological present, in seconds.
pub const PSYCHOLOGICAL_PRESENT_SECONDS: f64 = 3.0;

/// Heartbeats per minute.
pub const AVERAGE_HEARTBEAT: f64 = 70.0;

/// Breaths per minute.
pub const AVERAGE_BREATHING: f64 = 16.0;

/// Blinks per minute.
pub const AVERAGE_BLINKING: f64 = 17.0;

/// Scientific age of the universe in years.
pub const UNIVERSE_AGE_YEARS: f64 = 13.8e9;

/// Approximate span of written history in years.
pub const WRITTEN_HISTORY_YEARS: f64 = 5000.0;

/// Year offsets used by the future projections.
pub const PROJECTION_DELTAS: [f64; 5] = [1000.0, 5000.0, 10000.0, 50000.0, 100000.0];
