use rand::seq::SliceRandom;
use rand::Rng;

use super::employee::Employee;
use super::types::{Day, ScheduleGrid, Shift, ShiftConfig, StaffingWarning};

/// Minimum-staffing backfill pass: tops up every shift below the staffing
/// floor from employees with spare weekly capacity who are free that day,
/// regardless of their preferences. This is the one sanctioned preference
/// violation in the system. Candidates are shuffled so the forced shifts do
/// not systematically land on whoever comes first in the input.
///
/// Returns a warning per (day, shift) still short after all candidates are
/// exhausted; shortfalls are reported, never fatal.
pub fn fill_minimum_staff<R: Rng>(
    employees: &mut [Employee],
    grid: &mut ScheduleGrid,
    config: &ShiftConfig,
    rng: &mut R,
) -> Vec<StaffingWarning> {
    let mut warnings = Vec::new();

    for day in Day::ALL {
        for shift in Shift::ALL {
            let assigned = grid.occupancy(day, shift);
            if assigned >= config.min_per_shift {
                continue;
            }
            let needed = config.min_per_shift - assigned;

            let mut candidates: Vec<usize> = (0..employees.len())
                .filter(|&idx| {
                    employees[idx].can_work(config.max_work_days)
                        && !employees[idx].is_working_on(day)
                })
                .collect();
            candidates.shuffle(rng);

            let mut added = 0;
            for idx in candidates {
                if grid.occupancy(day, shift) >= config.max_per_shift {
                    break;
                }
                if added >= needed {
                    break;
                }
                grid.push(day, shift, idx);
                employees[idx].assign_shift(day, shift);
                added += 1;
            }

            if grid.occupancy(day, shift) < config.min_per_shift {
                eprintln!(
                    "Warning: Could not assign minimum staff to {} on {}.",
                    shift, day
                );
                warnings.push(StaffingWarning { day, shift });
            }
        }
    }

    warnings
}
