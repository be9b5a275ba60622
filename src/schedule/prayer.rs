//! Prayer window table and lookup

use std::collections::HashSet;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A named window of the day starting at `threshold` minutes after midnight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerWindow {
    pub name: String,
    pub threshold: u32,
}

impl PrayerWindow {
    /// Start of the window as "HH:MM"
    pub fn start_label(&self) -> String {
        format!("{:02}:{:02}", self.threshold / 60, self.threshold % 60)
    }
}

/// Ordered, validated set of daily prayer windows.
///
/// Thresholds are strictly increasing, so at most one window contains any
/// minute of the day. The last window runs until midnight; there is no window
/// between midnight and the first threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerWindowTable {
    windows: Vec<PrayerWindow>,
}

impl PrayerWindowTable {
    /// Build a table from `(name, minutes since midnight)` pairs, in order
    pub fn new<S: Into<String>>(entries: Vec<(S, u32)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = HashSet::new();
        let mut windows: Vec<PrayerWindow> = Vec::with_capacity(entries.len());

        for (index, (name, threshold)) in entries.into_iter().enumerate() {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(index));
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateName(name));
            }
            if threshold >= MINUTES_PER_DAY {
                return Err(ConfigError::ThresholdOutOfRange { name, minutes: threshold });
            }
            if let Some(previous) = windows.last() {
                if threshold <= previous.threshold {
                    return Err(ConfigError::NotIncreasing {
                        name,
                        minutes: threshold,
                        previous: previous.name.clone(),
                        previous_minutes: previous.threshold,
                    });
                }
            }
            windows.push(PrayerWindow { name, threshold });
        }

        Ok(Self { windows })
    }

    /// Approximate daily schedule the page ships with
    pub fn reference() -> Self {
        Self {
            windows: [
                ("subuh", 4 * 60 + 35),
                ("dzuhur", 11 * 60 + 58),
                ("ashar", 15 * 60 + 15),
                ("maghrib", 17 * 60 + 58),
                ("isya", 19 * 60 + 8),
            ]
            .into_iter()
            .map(|(name, threshold)| PrayerWindow { name: name.to_string(), threshold })
            .collect(),
        }
    }

    /// Parse `name=HH:MM` entries in order
    pub fn parse_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (name, time) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedEntry(entry.to_string()))?;
            let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
                .map_err(|_| ConfigError::MalformedEntry(entry.to_string()))?;
            pairs.push((name.trim().to_string(), minutes_since_midnight(time)));
        }
        Self::new(pairs)
    }

    pub fn windows(&self) -> &[PrayerWindow] {
        &self.windows
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.windows.iter().map(|w| w.name.as_str())
    }

    /// Name of the window containing `now_minutes`, if any
    pub fn locate(&self, now_minutes: u32) -> Option<&str> {
        let index = locate_index(self.windows.iter().map(|w| w.threshold), now_minutes)?;
        Some(self.windows[index].name.as_str())
    }
}

/// Locate the window for `now_minutes` in an ordered `(name, threshold)` slice.
///
/// Entry `i` matches when `now >= t[i]` and it is either the last entry or
/// `now < t[i + 1]`.
pub fn locate_window<'a, S: AsRef<str>>(table: &'a [(S, u32)], now_minutes: u32) -> Option<&'a str> {
    let index = locate_index(table.iter().map(|(_, t)| *t), now_minutes)?;
    Some(table[index].0.as_ref())
}

fn locate_index<I>(thresholds: I, now_minutes: u32) -> Option<usize>
where
    I: Iterator<Item = u32>,
{
    let thresholds: Vec<u32> = thresholds.collect();
    (0..thresholds.len()).find(|&i| {
        now_minutes >= thresholds[i]
            && thresholds.get(i + 1).map_or(true, |next| now_minutes < *next)
    })
}

/// Minutes elapsed since local midnight, ignoring seconds
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_windows() {
        let table = PrayerWindowTable::reference();
        assert_eq!(table.locate(800), Some("dzuhur"));
        assert_eq!(table.locate(275), Some("subuh"));
        assert_eq!(table.locate(717), Some("subuh"));
        assert_eq!(table.locate(718), Some("dzuhur"));
        assert_eq!(table.locate(1148), Some("isya"));
        assert_eq!(table.locate(1439), Some("isya"));
    }

    #[test]
    fn nothing_before_first_threshold() {
        let table = PrayerWindowTable::reference();
        assert_eq!(table.locate(0), None);
        assert_eq!(table.locate(100), None);
        assert_eq!(table.locate(274), None);
    }

    #[test]
    fn free_function_matches_table() {
        let pairs: [(&str, u32); 5] = [("subuh", 275), ("dzuhur", 718), ("ashar", 915), ("maghrib", 1078), ("isya", 1148)];
        assert_eq!(locate_window(&pairs, 800), Some("dzuhur"));
        assert_eq!(locate_window(&pairs, 1100), Some("maghrib"));
        assert_eq!(locate_window(&pairs, 100), None);

        let single: [(&str, u32); 1] = [("only", 0)];
        assert_eq!(locate_window(&single, 0), Some("only"));
        assert_eq!(locate_window(&single, 1439), Some("only"));
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(
            PrayerWindowTable::new(Vec::<(String, u32)>::new()),
            Err(ConfigError::EmptyTable)
        );
        assert!(matches!(
            PrayerWindowTable::new(vec![("a", 300), ("b", 300)]),
            Err(ConfigError::NotIncreasing { .. })
        ));
        assert!(matches!(
            PrayerWindowTable::new(vec![("a", 300), ("b", 200)]),
            Err(ConfigError::NotIncreasing { .. })
        ));
        assert_eq!(
            PrayerWindowTable::new(vec![("a", 1440)]),
            Err(ConfigError::ThresholdOutOfRange { name: "a".into(), minutes: 1440 })
        );
        assert_eq!(
            PrayerWindowTable::new(vec![("a", 10), ("a", 20)]),
            Err(ConfigError::DuplicateName("a".into()))
        );
        assert_eq!(PrayerWindowTable::new(vec![(" ", 10)]), Err(ConfigError::EmptyName(0)));
    }

    #[test]
    fn parses_entries() {
        let table = PrayerWindowTable::parse_entries(["fajr=05:01", "dhuhr = 12:30"]).unwrap();
        assert_eq!(table.windows()[0], PrayerWindow { name: "fajr".into(), threshold: 301 });
        assert_eq!(table.windows()[1].start_label(), "12:30");

        assert_eq!(
            PrayerWindowTable::parse_entries(["fajr"]),
            Err(ConfigError::MalformedEntry("fajr".into()))
        );
        assert_eq!(
            PrayerWindowTable::parse_entries(["fajr=25:00"]),
            Err(ConfigError::MalformedEntry("fajr=25:00".into()))
        );
    }

    #[test]
    fn minutes_ignore_seconds() {
        let time = NaiveTime::from_hms_opt(11, 58, 59).unwrap();
        assert_eq!(minutes_since_midnight(time), 718);
    }
}
