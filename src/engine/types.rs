use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staffing floor per shift; shortfalls below this are warned about.
pub const MIN_PER_SHIFT: usize = 2;
/// Hard occupancy ceiling per shift.
pub const MAX_PER_SHIFT: usize = 3;
/// An employee works at most this many days per week.
pub const MAX_WORK_DAYS: usize = 5;

/// One of the seven weekdays, in fixed weekly order (used for spillover).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The following day in the weekly cycle, or None after Sunday.
    pub fn next(self) -> Option<Day> {
        let idx = Day::ALL.iter().position(|&d| d == self)?;
        Day::ALL.get(idx + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Day::Monday),
            "tuesday" => Ok(Day::Tuesday),
            "wednesday" => Ok(Day::Wednesday),
            "thursday" => Ok(Day::Thursday),
            "friday" => Ok(Day::Friday),
            "saturday" => Ok(Day::Saturday),
            "sunday" => Ok(Day::Sunday),
            other => Err(format!("Unknown day: {}", other)),
        }
    }
}

/// One of the three daily work periods. No inherent ordering; ranking is
/// per-employee via preference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Shift::Morning),
            "afternoon" => Ok(Shift::Afternoon),
            "evening" => Ok(Shift::Evening),
            other => Err(format!("Unknown shift: {}", other)),
        }
    }
}

/// Staffing limits for a run. Fixed in the current scope but passed as named
/// parameters so the passes never hard-code them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub min_per_shift: usize,
    pub max_per_shift: usize,
    pub max_work_days: usize,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        ShiftConfig {
            min_per_shift: MIN_PER_SHIFT,
            max_per_shift: MAX_PER_SHIFT,
            max_work_days: MAX_WORK_DAYS,
        }
    }
}

/// A shift left below the staffing floor after backfill. Non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingWarning {
    pub day: Day,
    pub shift: Shift,
}

/// The day x shift matrix of assignments. Slots hold indices into the
/// roster's employee list, in assignment order (insertion order, not
/// priority). This is the grid-side view of who works when; the employee's
/// own `assignments` map is the other view, and every mutation goes through
/// the paired helpers in this module so the two never diverge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleGrid {
    slots: HashMap<Day, HashMap<Shift, Vec<usize>>>,
}

impl ScheduleGrid {
    pub fn new() -> Self {
        let mut slots = HashMap::new();
        for day in Day::ALL {
            let mut shifts = HashMap::new();
            for shift in Shift::ALL {
                shifts.insert(shift, Vec::new());
            }
            slots.insert(day, shifts);
        }
        ScheduleGrid { slots }
    }

    /// Employee indices in a slot, in assignment order.
    pub fn slot(&self, day: Day, shift: Shift) -> &[usize] {
        self.slots
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn occupancy(&self, day: Day, shift: Shift) -> usize {
        self.slot(day, shift).len()
    }

    pub(crate) fn push(&mut self, day: Day, shift: Shift, emp_idx: usize) {
        self.slots
            .entry(day)
            .or_default()
            .entry(shift)
            .or_default()
            .push(emp_idx);
    }

    pub(crate) fn remove(&mut self, day: Day, shift: Shift, emp_idx: usize) {
        if let Some(slot) = self.slots.get_mut(&day).and_then(|s| s.get_mut(&shift)) {
            slot.retain(|&idx| idx != emp_idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_order_wraps_to_none_after_sunday() {
        assert_eq!(Day::Monday.next(), Some(Day::Tuesday));
        assert_eq!(Day::Saturday.next(), Some(Day::Sunday));
        assert_eq!(Day::Sunday.next(), None);
    }

    #[test]
    fn shift_parses_case_insensitively() {
        assert_eq!(" Morning ".parse::<Shift>(), Ok(Shift::Morning));
        assert_eq!("EVENING".parse::<Shift>(), Ok(Shift::Evening));
        assert!("night".parse::<Shift>().is_err());
    }

    #[test]
    fn grid_push_and_remove_keep_order() {
        let mut grid = ScheduleGrid::new();
        grid.push(Day::Monday, Shift::Morning, 0);
        grid.push(Day::Monday, Shift::Morning, 2);
        grid.push(Day::Monday, Shift::Morning, 1);
        assert_eq!(grid.slot(Day::Monday, Shift::Morning), &[0, 2, 1]);

        grid.remove(Day::Monday, Shift::Morning, 2);
        assert_eq!(grid.slot(Day::Monday, Shift::Morning), &[0, 1]);
        assert_eq!(grid.occupancy(Day::Tuesday, Shift::Evening), 0);
    }
}
