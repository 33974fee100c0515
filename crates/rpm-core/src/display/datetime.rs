//! Date display utilities.
//!
//! Plans are dated the way Indonesian school documents are: day, month name
//! and year, e.g. `15 Oktober 2026`, in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A wrapper around `Timestamp` that formats the local calendar date with
/// Indonesian month names.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl<'a> LocalDate<'a> {
    /// Format the date as seen from `tz`.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        let zoned = self.0.to_zoned(tz);
        let month = MONTHS
            .get(usize::from(zoned.month().unsigned_abs()).saturating_sub(1))
            .copied()
            .unwrap_or_default();
        format!("{} {month} {}", zoned.day(), zoned.year())
    }
}

impl<'a> fmt::Display for LocalDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_zone(TimeZone::system()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indonesian_month_names() {
        let ts: Timestamp = "2026-10-15T03:00:00Z".parse().unwrap();
        assert_eq!(LocalDate(&ts).in_zone(TimeZone::UTC), "15 Oktober 2026");

        let ts: Timestamp = "2025-01-02T12:00:00Z".parse().unwrap();
        assert_eq!(LocalDate(&ts).in_zone(TimeZone::UTC), "2 Januari 2025");
    }

    #[test]
    fn test_date_follows_timezone() {
        let ts: Timestamp = "2026-10-15T20:00:00Z".parse().unwrap();
        let jakarta = TimeZone::fixed(jiff::tz::offset(7));
        assert_eq!(LocalDate(&ts).in_zone(jakarta), "16 Oktober 2026");
    }
}
