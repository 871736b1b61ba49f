use super::employee::Employee;
use super::types::{Day, ScheduleGrid, Shift, ShiftConfig};

/// Places one employee into a slot if the weekly cap, the one-shift-per-day
/// rule, and the slot ceiling all allow it. Updates the grid and the
/// employee's assignment map together.
pub fn try_assign(
    grid: &mut ScheduleGrid,
    emp: &mut Employee,
    emp_idx: usize,
    day: Day,
    shift: Shift,
    config: &ShiftConfig,
) -> bool {
    if emp.can_work(config.max_work_days)
        && !emp.is_working_on(day)
        && grid.occupancy(day, shift) < config.max_per_shift
    {
        grid.push(day, shift, emp_idx);
        emp.assign_shift(day, shift);
        return true;
    }
    false
}

/// Initial assignment pass: for each employee in input order, for each day of
/// the week, first-fit over that day's preference list. Earlier employees
/// have first claim on scarce slots. Days that cannot be filled are left
/// unassigned for later passes; that is not an error.
pub fn assign_initial(employees: &mut [Employee], grid: &mut ScheduleGrid, config: &ShiftConfig) {
    for idx in 0..employees.len() {
        for day in Day::ALL {
            let prefs = employees[idx].preferences_for(day).to_vec();
            for shift in prefs {
                if try_assign(grid, &mut employees[idx], idx, day, shift, config) {
                    break;
                }
            }
        }
    }
}
