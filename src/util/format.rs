// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a catalog vote average to one decimal place, as shown on every
/// title row and card.
pub(crate) fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

/// The release year of a `YYYY-MM-DD` catalog date string.
///
/// Catalog dates are occasionally empty or truncated; anything without a
/// four-digit year yields `None`.
pub(crate) fn release_year(release_date: &str) -> Option<&str> {
    let year = release_date.get(0..4)?;
    year.chars().all(|c| c.is_ascii_digit()).then_some(year)
}

/// Formats a runtime in minutes into an `Hh MMm` string.
pub(crate) fn format_runtime(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_round_to_one_decimal() {
        assert_eq!(format_rating(7.849), "7.8");
        assert_eq!(format_rating(0.0), "0.0");
    }

    #[test]
    fn year_comes_from_well_formed_dates_only() {
        assert_eq!(release_year("2021-10-22"), Some("2021"));
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("tba"), None);
    }

    #[test]
    fn runtimes_format_as_hours_and_minutes() {
        assert_eq!(format_runtime(155), "2h 35m");
        assert_eq!(format_runtime(45), "45m");
        assert_eq!(format_runtime(120), "2h 00m");
    }
}
