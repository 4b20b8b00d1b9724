//! Performance reports.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// What a single play produced: the sound lines in the order they were
/// made, and the tuning actually lost.
///
/// Playing never prints anything itself; callers decide what to do with
/// the report. Most performances carry one or two lines, hence the
/// `SmallVec`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    notes: SmallVec<[String; 2]>,
    wear: f64,
}

impl Performance {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: SmallVec::new(),
            wear: 0.0,
        }
    }

    /// Append a sound line (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append a sound line.
    pub fn push_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Record tuning lost during the performance.
    pub fn add_wear(&mut self, wear: f64) {
        self.wear += wear;
    }

    /// The sound lines, in order.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Total tuning lost. Zero when the wear floor guard skipped the decay.
    #[must_use]
    pub const fn wear(&self) -> f64 {
        self.wear
    }
}

impl Default for Performance {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Performance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let performance = Performance::new()
            .with_note("Guitar is playing")
            .with_note("Twang");
        assert_eq!(performance.notes(), ["Guitar is playing", "Twang"]);
        assert_eq!(performance.wear(), 0.0);
    }

    #[test]
    fn test_push_and_wear() {
        let mut performance = Performance::new();
        performance.push_note("Pom-pom-pom");
        performance.add_wear(0.7);
        assert_eq!(performance.notes().len(), 1);
        assert_eq!(performance.wear(), 0.7);
    }

    #[test]
    fn test_display_joins_lines() {
        let performance = Performance::new().with_note("first").with_note("second");
        assert_eq!(performance.to_string(), "first\nsecond");
    }

    #[test]
    fn test_serialization_round_trip() {
        let performance = Performance::new().with_note("Twang");
        let json = serde_json::to_string(&performance).unwrap();
        let back: Performance = serde_json::from_str(&json).unwrap();
        assert_eq!(performance, back);
    }
}
