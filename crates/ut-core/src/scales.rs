use crate::constants::{YEARS_PER_COSMIC_DAY, YEARS_PER_DIVINE_DAY};

/// A day count on a synthetic timeline, split into sexagesimal remainders.
///
/// `hours`, `minutes` and `seconds` are unrounded: `hours` carries the whole
/// fractional day, `minutes` the fractional hour, `seconds` the fractional
/// minute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayBreakdown {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DayBreakdown {
    /// Split `years` into days of `years_per_day` years each.
    pub fn new(years: f64, years_per_day: f64) -> Self {
        let days = years / years_per_day;
        let hours = (days % 1.0) * 24.0;
        let minutes = (hours % 1.0) * 60.0;
        let seconds = (minutes % 1.0) * 60.0;
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Reassemble the fractional day from the whole hour, whole minute and
    /// second components.
    pub fn fraction_of_day(&self) -> f64 {
        self.hours.trunc() / 24.0 + self.minutes.trunc() / 1440.0 + self.seconds / 86400.0
    }

    /// Display form: whole days (floor) and truncated `hh:mm:ss`.
    pub fn clock(&self) -> (f64, i64, i64, i64) {
        (
            self.days.floor(),
            self.hours as i64,
            self.minutes as i64,
            self.seconds as i64,
        )
    }
}

/// An elapsed-years value expressed on the cosmic and divine timelines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalScales {
    pub years_human: f64,
    pub cosmic: DayBreakdown,
    pub divine: DayBreakdown,
}

impl TemporalScales {
    pub fn days_cosmic(&self) -> f64 {
        self.cosmic.days
    }

    pub fn days_divine(&self) -> f64 {
        self.divine.days
    }
}

/// Convert elapsed years to cosmic (1 day = 1000 years) and divine
/// (1 day = 50000 years) day breakdowns. Any finite input is accepted.
pub fn years_to_scales(years: f64) -> TemporalScales {
    TemporalScales {
        years_human: years,
        cosmic: DayBreakdown::new(years, YEARS_PER_COSMIC_DAY),
        divine: DayBreakdown::new(years, YEARS_PER_DIVINE_DAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_days() {
        let s = years_to_scales(5824.0);
        assert_relative_eq!(s.days_cosmic(), 5.824, epsilon = 1e-12);
        assert_relative_eq!(s.days_divine(), 0.11648, epsilon = 1e-12);
        assert_eq!(s.years_human, 5824.0);
    }

    #[test]
    fn test_baseline_cosmic_clock() {
        // 0.824 day = 19h 46m 33.6s
        let (days, h, m, sec) = years_to_scales(5824.0).cosmic.clock();
        assert_eq!(days, 5.0);
        assert_eq!(h, 19);
        assert_eq!(m, 46);
        assert!(sec == 33 || sec == 34, "got {sec}");
    }

    #[test]
    fn test_baseline_divine_clock() {
        // 0.11648 day = 2h 47m 43.872s
        let (days, h, m, sec) = years_to_scales(5824.0).divine.clock();
        assert_eq!(days, 0.0);
        assert_eq!(h, 2);
        assert_eq!(m, 47);
        assert_eq!(sec, 43);
    }

    #[test]
    fn test_whole_days_have_zero_remainder() {
        let s = years_to_scales(3000.0);
        assert_eq!(s.cosmic.days, 3.0);
        assert_eq!(s.cosmic.hours, 0.0);
        assert_eq!(s.cosmic.minutes, 0.0);
        assert_eq!(s.cosmic.seconds, 0.0);
    }

    #[test]
    fn test_zero_years() {
        let s = years_to_scales(0.0);
        assert_eq!(s.cosmic.clock(), (0.0, 0, 0, 0));
        assert_eq!(s.divine.clock(), (0.0, 0, 0, 0));
    }

    #[test]
    fn test_negative_years_accepted() {
        // fmod keeps the sign of the dividend
        let s = years_to_scales(-500.0);
        assert_relative_eq!(s.cosmic.days, -0.5);
        assert_relative_eq!(s.cosmic.hours, -12.0);
        assert_eq!(s.cosmic.days.floor(), -1.0);
    }

    #[test]
    fn test_fraction_reconstruction() {
        let s = years_to_scales(5824.0);
        assert_relative_eq!(s.cosmic.fraction_of_day(), 0.824, epsilon = 1e-9);
        assert_relative_eq!(s.divine.fraction_of_day(), 0.11648, epsilon = 1e-9);
    }
}
