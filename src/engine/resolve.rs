use super::employee::Employee;
use super::types::{Day, ScheduleGrid, Shift, ShiftConfig};

/// Moves one employee between slots, updating the grid and the assignment
/// map in one step so the two views of the schedule stay in sync.
fn move_employee(
    grid: &mut ScheduleGrid,
    emp: &mut Employee,
    emp_idx: usize,
    from: (Day, Shift),
    to: (Day, Shift),
) {
    grid.remove(from.0, from.1, emp_idx);
    emp.remove_shift(from.0);
    grid.push(to.0, to.1, emp_idx);
    emp.assign_shift(to.0, to.1);
}

/// Conflict resolution pass: upgrades employees stuck below their top
/// preference. For each employee in input order, for each assigned day in
/// week order (snapshotted before any moves), scan the day's preference list
/// from the top looking for a better-ranked shift with spare capacity; the
/// scan stops at the currently assigned shift. On a match the employee moves
/// within the day and that day is done.
///
/// When no same-day upgrade lands and a next day exists, try a one-shot
/// spillover: if the employee has weekly capacity left, is free on the next
/// day, and the next day's top-preference shift has room, the whole
/// assignment moves there. No cascading, no second look at days already
/// processed; the pass runs exactly once.
pub fn resolve_conflicts(employees: &mut [Employee], grid: &mut ScheduleGrid, config: &ShiftConfig) {
    for idx in 0..employees.len() {
        let assigned_days: Vec<Day> = Day::ALL
            .into_iter()
            .filter(|&day| employees[idx].is_working_on(day))
            .collect();

        for day in assigned_days {
            let assigned_shift = match employees[idx].assigned_shift(day) {
                Some(shift) => shift,
                None => continue,
            };
            let prefs = employees[idx].preferences_for(day).to_vec();
            if prefs.first() == Some(&assigned_shift) {
                continue;
            }

            let mut upgraded = false;
            for &preferred in &prefs {
                if preferred == assigned_shift {
                    // Every better-ranked shift was full; no same-day upgrade.
                    break;
                }
                if grid.occupancy(day, preferred) < config.max_per_shift {
                    move_employee(
                        grid,
                        &mut employees[idx],
                        idx,
                        (day, assigned_shift),
                        (day, preferred),
                    );
                    upgraded = true;
                    break;
                }
            }

            if !upgraded {
                if let Some(next_day) = day.next() {
                    let next_top = match employees[idx].preferences_for(next_day).first() {
                        Some(&shift) => shift,
                        None => continue,
                    };
                    if employees[idx].can_work(config.max_work_days)
                        && !employees[idx].is_working_on(next_day)
                        && grid.occupancy(next_day, next_top) < config.max_per_shift
                    {
                        move_employee(
                            grid,
                            &mut employees[idx],
                            idx,
                            (day, assigned_shift),
                            (next_day, next_top),
                        );
                    }
                }
                // Sunday with no improvement is accepted silently.
            }
        }
    }
}
