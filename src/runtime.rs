//! Runtime arithmetic
//!
//! Helpers for picking the show to measure, adding up episode runtimes and
//! presenting the totals.

use crate::catalog::{Episode, Show};

/// Picks the show with the most recent premiere date.
///
/// Shows without a premiere date rank below every dated show. When several
/// shows share the latest date (or none has a date at all) the first one in
/// `shows` wins.
///
/// Returns `None` only when `shows` is empty.
pub fn select_latest_show(shows: &[Show]) -> Option<&Show> {
    shows.iter().fold(None::<&Show>, |latest, show| match latest {
        Some(current) if show.premiered <= current.premiered => Some(current),
        _ => Some(show),
    })
}

/// Sums the runtime of all episodes with a known runtime.
pub fn total_runtime(episodes: &[Episode]) -> u64 {
    episodes
        .iter()
        .filter_map(|episode| episode.runtime)
        .map(u64::from)
        .sum()
}

/// Formats a number of minutes as `"{hours}h {minutes}m"`.
pub fn format_hours_minutes(total_minutes: u64) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Finds the shortest and the longest entry of `(title, minutes)` pairs.
///
/// Ties go to the entry that comes first.
pub fn shortest_and_longest(
    runtimes: &[(String, u64)],
) -> Option<(&(String, u64), &(String, u64))> {
    let first = runtimes.first()?;

    let (shortest, longest) = runtimes.iter().skip(1).fold(
        (first, first),
        |(shortest, longest), entry| {
            let shortest = if entry.1 < shortest.1 { entry } else { shortest };
            let longest = if entry.1 > longest.1 { entry } else { longest };
            (shortest, longest)
        },
    );

    Some((shortest, longest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn show(id: u64, premiered: Option<(i32, u32, u32)>) -> Show {
        Show {
            id,
            name: format!("Show {}", id),
            premiered: premiered.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        }
    }

    fn episodes(runtimes: &[Option<u32>]) -> Vec<Episode> {
        runtimes
            .iter()
            .map(|runtime| Episode { runtime: *runtime })
            .collect()
    }

    #[test]
    fn test_select_latest_show() {
        let shows = vec![
            show(1, Some((1994, 9, 22))),
            show(2, Some((2021, 3, 5))),
            show(3, Some((2008, 1, 20))),
        ];
        assert_eq!(select_latest_show(&shows).map(|s| s.id), Some(2));
    }

    #[test]
    fn test_select_latest_show_ignores_missing_dates() {
        let shows = vec![
            show(1, None),
            show(2, Some((2001, 1, 1))),
            show(3, None),
        ];
        assert_eq!(select_latest_show(&shows).map(|s| s.id), Some(2));
    }

    #[test]
    fn test_select_latest_show_ties_keep_response_order() {
        let shows = vec![
            show(1, Some((2001, 1, 1))),
            show(2, Some((2010, 6, 1))),
            show(3, Some((2010, 6, 1))),
        ];
        assert_eq!(select_latest_show(&shows).map(|s| s.id), Some(2));

        let undated = vec![show(4, None), show(5, None)];
        assert_eq!(select_latest_show(&undated).map(|s| s.id), Some(4));
    }

    #[test]
    fn test_select_latest_show_empty() {
        assert_eq!(select_latest_show(&[]), None);
    }

    #[test]
    fn test_total_runtime() {
        assert_eq!(total_runtime(&episodes(&[Some(30), None, Some(22)])), 52);
        assert_eq!(total_runtime(&episodes(&[None, None])), 0);
        assert_eq!(total_runtime(&[]), 0);
        assert_eq!(
            total_runtime(&episodes(&[Some(u32::MAX), Some(1)])),
            u64::from(u32::MAX) + 1
        );
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0), "0h 0m");
        assert_eq!(format_hours_minutes(59), "0h 59m");
        assert_eq!(format_hours_minutes(60), "1h 0m");
        assert_eq!(format_hours_minutes(3_725), "62h 5m");
    }

    #[test]
    fn test_shortest_and_longest() {
        let runtimes = vec![
            ("Friends".to_string(), 5_316),
            ("Fleabag".to_string(), 325),
            ("The Office".to_string(), 4_169),
        ];
        let (shortest, longest) = shortest_and_longest(&runtimes).unwrap();
        assert_eq!(shortest.0, "Fleabag");
        assert_eq!(longest.0, "Friends");

        let single = vec![("Only".to_string(), 10)];
        let (shortest, longest) = shortest_and_longest(&single).unwrap();
        assert_eq!(shortest.0, "Only");
        assert_eq!(longest.0, "Only");

        assert!(shortest_and_longest(&[]).is_none());
    }

    #[test]
    fn test_shortest_and_longest_ties_keep_first() {
        let runtimes = vec![
            ("A".to_string(), 100),
            ("B".to_string(), 100),
            ("C".to_string(), 50),
            ("D".to_string(), 50),
        ];
        let (shortest, longest) = shortest_and_longest(&runtimes).unwrap();
        assert_eq!(shortest.0, "C");
        assert_eq!(longest.0, "A");
    }
}
