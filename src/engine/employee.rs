use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{Day, Shift};

/// One roster member: identity, ranked per-day shift preferences, and the
/// current per-day assignment (at most one shift per day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    /// Day -> shifts in priority order, validated upstream (non-empty, no
    /// repeats). A key exists for every day of the week.
    pub preferences: HashMap<Day, Vec<Shift>>,
    /// Day -> assigned shift; absence means unassigned that day.
    pub assignments: HashMap<Day, Shift>,
}

impl Employee {
    pub fn new(name: impl Into<String>, preferences: HashMap<Day, Vec<Shift>>) -> Self {
        Employee {
            name: name.into(),
            preferences,
            assignments: HashMap::new(),
        }
    }

    /// Whether the employee is still under the weekly day cap.
    pub fn can_work(&self, max_work_days: usize) -> bool {
        self.assignments.len() < max_work_days
    }

    pub fn is_working_on(&self, day: Day) -> bool {
        self.assignments.contains_key(&day)
    }

    pub fn assigned_shift(&self, day: Day) -> Option<Shift> {
        self.assignments.get(&day).copied()
    }

    pub fn assign_shift(&mut self, day: Day, shift: Shift) {
        self.assignments.insert(day, shift);
    }

    pub fn remove_shift(&mut self, day: Day) {
        self.assignments.remove(&day);
    }

    /// Preference list for a day; empty slice if the day is missing
    /// (does not happen with validated input).
    pub fn preferences_for(&self, day: Day) -> &[Shift] {
        self.preferences
            .get(&day)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }
}
