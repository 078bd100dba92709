//! Calendar-year offsets between chronologies.
//!
//! Every chronology here is a fixed integer offset from the Gregorian year.
//! The Hijri conversion is the usual 33/32 lunar-to-solar approximation and
//! is not an exact calendar conversion.

/// Hebrew calendar epoch offset (years before year 0).
pub const HEBREW_OFFSET: i32 = 3761;

/// Ussher chronology creation offset.
pub const USSHER_OFFSET: i32 = 4004;

/// Gregorian year of the Hijra.
pub const HIJRA_YEAR: i32 = 622;

/// Difference between the Buddhist Era and the Gregorian year.
pub const BUDDHIST_ERA_SHIFT: i32 = -543;

/// A named dating system anchored at a creation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chronology {
    pub name: &'static str,
    /// Years between the creation event and year 0.
    pub creation_offset: i32,
    /// Extra shift applied on top of `creation_offset + year`.
    pub era_adjustment: i32,
}

/// A chronology evaluated against a reference year.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarAlternative {
    pub name: &'static str,
    pub creation_offset: i32,
    pub years_since_creation: f64,
}

impl Chronology {
    pub const fn new(name: &'static str, creation_offset: i32) -> Self {
        Self {
            name,
            creation_offset,
            era_adjustment: 0,
        }
    }

    pub const fn with_era_adjustment(mut self, era_adjustment: i32) -> Self {
        self.era_adjustment = era_adjustment;
        self
    }

    pub fn years_since_creation(&self, anchor_year: i32) -> f64 {
        years_since_mark(self.creation_offset, anchor_year) + f64::from(self.era_adjustment)
    }

    pub fn evaluate(&self, anchor_year: i32) -> CalendarAlternative {
        CalendarAlternative {
            name: self.name,
            creation_offset: self.creation_offset,
            years_since_creation: self.years_since_creation(anchor_year),
        }
    }
}

/// Chronologies compared in the report, in display order.
pub const CHRONOLOGIES: &[Chronology] = &[
    Chronology::new("Jewish (Adam)", HEBREW_OFFSET),
    Chronology::new("Christian Traditional (Adam)", USSHER_OFFSET),
    Chronology::new("Islamic (Adam)", crate::constants::CREATION_ADAM_AC),
    Chronology::new("Hindu (Kali Yuga)", 3102),
    Chronology::new("Buddhist Era", 2567).with_era_adjustment(BUDDHIST_ERA_SHIFT),
];

/// Evaluate every entry of [`CHRONOLOGIES`] against `anchor_year`.
pub fn compare_chronologies(anchor_year: i32) -> Vec<CalendarAlternative> {
    CHRONOLOGIES.iter().map(|c| c.evaluate(anchor_year)).collect()
}

pub fn calendar_offset(gregorian_year: i32, epoch_offset: i32) -> i32 {
    gregorian_year + epoch_offset
}

pub fn to_hebrew_year(gregorian_year: i32) -> i32 {
    calendar_offset(gregorian_year, HEBREW_OFFSET)
}

pub fn to_ussher_year(gregorian_year: i32) -> i32 {
    calendar_offset(gregorian_year, USSHER_OFFSET)
}

/// Approximate Hijri year: `(y - 622) * 33 / 32`, truncated toward zero.
pub fn to_hijri_year(gregorian_year: i32) -> i32 {
    (f64::from(gregorian_year - HIJRA_YEAR) * 33.0 / 32.0) as i32
}

/// Elapsed years since a mark `mark_offset` years before year 0.
pub fn years_since_mark(mark_offset: i32, current_year: i32) -> f64 {
    f64::from(mark_offset) + f64::from(current_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_offsets() {
        assert_eq!(to_hebrew_year(2024), 5785);
        assert_eq!(to_ussher_year(2024), 6028);
        assert_eq!(calendar_offset(2024, 0), 2024);
    }

    #[test]
    fn test_hijri_year() {
        // (2024 - 622) * 33 / 32 = 1445.81
        assert_eq!(to_hijri_year(2024), 1445);
        assert_eq!(to_hijri_year(2026), 1447);
        assert_eq!(to_hijri_year(622), 0);
    }

    #[test]
    fn test_hijri_truncates_toward_zero() {
        // (600 - 622) * 33 / 32 = -22.6875
        assert_eq!(to_hijri_year(600), -22);
    }

    #[test]
    fn test_years_since_adam() {
        assert_eq!(years_since_mark(3800, 2024), 5824.0);
    }

    #[test]
    fn test_chronology_table_order() {
        let names: Vec<&str> = CHRONOLOGIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Jewish (Adam)",
                "Christian Traditional (Adam)",
                "Islamic (Adam)",
                "Hindu (Kali Yuga)",
                "Buddhist Era",
            ]
        );
    }

    #[test]
    fn test_buddhist_era_adjustment() {
        let results = compare_chronologies(2024);
        let buddhist = results.last().unwrap();
        assert_eq!(buddhist.name, "Buddhist Era");
        assert_eq!(buddhist.years_since_creation, 2567.0 + 2024.0 - 543.0);
    }

    #[test]
    fn test_other_chronologies_unadjusted() {
        let results = compare_chronologies(2024);
        for alt in &results[..4] {
            assert_eq!(
                alt.years_since_creation,
                f64::from(alt.creation_offset + 2024),
                "{}",
                alt.name
            );
        }
    }
}
