//! Frequency statistics over extracted color labels.
//!
//! The interesting wrinkle is that three of the five results are defined
//! over different domains: the mean and variance are computed over the
//! *frequency values*, the mode over the table, and the "median color" over
//! the raw label sequence sorted alphabetically.

use serde::{Deserialize, Serialize};

/// Insertion-ordered color frequency table.
///
/// Order matters: ties in [`FrequencyTable::mean_color`] resolve to the
/// color seen first in the input, so entries keep first-seen order rather
/// than living in a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Build the table from a label sequence, counting in first-seen order.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut entries: Vec<(String, u64)> = Vec::new();
        for label in labels {
            let label = label.as_ref();
            match entries.iter_mut().find(|(name, _)| name == label) {
                Some((_, count)) => *count += 1,
                None => entries.push((label.to_string(), 1)),
            }
        }
        FrequencyTable { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total observations across all colors.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Count for one color, 0 if never seen.
    pub fn count(&self, name: &str) -> u64 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0, |(_, count)| *count)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Arithmetic mean of the frequency values.
    pub fn mean_frequency(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total() as f64 / self.entries.len() as f64
    }

    /// The color whose count is nearest the mean frequency.
    ///
    /// Ties go to the earlier entry (strict `<` comparison while folding).
    pub fn mean_color(&self) -> Option<&str> {
        let mean = self.mean_frequency();
        let mut best: Option<(&str, f64)> = None;
        for (name, count) in self.iter() {
            let distance = (count as f64 - mean).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((name, distance));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Most frequent color. Ties go to the earlier entry.
    pub fn mode(&self) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        for (name, count) in self.iter() {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((name, count));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Population variance of the frequency values.
    ///
    /// 0.0 when fewer than two distinct colors are present.
    pub fn variance(&self) -> f64 {
        if self.entries.len() < 2 {
            return 0.0;
        }
        let mean = self.mean_frequency();
        let sum_sq: f64 = self
            .iter()
            .map(|(_, count)| {
                let d = count as f64 - mean;
                d * d
            })
            .sum();
        sum_sq / self.entries.len() as f64
    }

    /// Probability of drawing `name` from the observations, as a percentage.
    pub fn probability_of(&self, name: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(name) as f64 / total as f64 * 100.0
    }
}

/// Alphabetically middle element of the raw label sequence.
///
/// This is the survey's "median color": sort every observation (not the
/// distinct colors) and take index `len / 2`.
pub fn median_color<S: AsRef<str>>(labels: &[S]) -> Option<&str> {
    if labels.is_empty() {
        return None;
    }
    let mut sorted: Vec<&str> = labels.iter().map(|s| s.as_ref()).collect();
    sorted.sort_unstable();
    Some(sorted[sorted.len() / 2])
}

/// The five analysis results, ready for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Total observations in the input sequence
    pub total_observed: usize,
    /// Color whose count is nearest the mean frequency
    pub mean_color: String,
    /// Most frequent color
    pub mode: String,
    /// Alphabetically middle observation
    pub median_color: String,
    /// Population variance of the frequency values
    pub variance: f64,
    /// Chance of drawing RED, as a percentage
    pub red_probability: f64,
}

/// Color whose draw probability is reported.
pub const REPORTED_COLOR: &str = "RED";

/// Run the full analysis over a label sequence.
///
/// Returns `None` for an empty sequence; the caller reports the absence.
pub fn analyze<S: AsRef<str>>(labels: &[S]) -> Option<(FrequencyTable, Analysis)> {
    if labels.is_empty() {
        return None;
    }

    let table = FrequencyTable::from_labels(labels);
    let analysis = Analysis {
        total_observed: labels.len(),
        mean_color: table.mean_color().unwrap_or_default().to_string(),
        mode: table.mode().unwrap_or_default().to_string(),
        median_color: median_color(labels).unwrap_or_default().to_string(),
        variance: table.variance(),
        red_probability: table.probability_of(REPORTED_COLOR),
    };

    Some((table, analysis))
}
