//! Built-in tea presets.

use std::time::Duration;

/// A named brew configuration with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
}

impl Preset {
    pub const fn new(name: &'static str, description: &'static str, duration_minutes: u32) -> Self {
        Self {
            name,
            description,
            duration_minutes,
        }
    }

    /// Text shown on the first line of a list entry.
    pub fn title(&self) -> &str {
        self.name
    }

    /// Text shown on the second line of a list entry.
    pub fn description(&self) -> &str {
        self.description
    }

    /// Text matched against the list filter.
    pub fn filter_value(&self) -> &str {
        self.name
    }

    /// Total brewing time.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_minutes) * 60)
    }
}

const PRESETS: &[Preset] = &[
    Preset::new("Black Tea", "95C for 5 minutes", 5),
    Preset::new("Green Tea", "75C for 3 minutes", 3),
    Preset::new("Oolong Tea", "90C for 4 minutes", 4),
    Preset::new("White Tea", "80C for 3 minutes", 3),
    Preset::new("Herbal Tea", "100C for 8 minutes", 8),
    Preset::new("Rooibos Tea", "100C for 8 minutes", 8),
];

/// Returns the presets in display order.
pub fn list_presets() -> &'static [Preset] {
    PRESETS
}
