use std::fs::File;
use std::io::Write;

use crate::engine::{Day, Employee, ScheduleOutcome, Shift};

/// Renders the finished grid day-by-day as plain text.
pub fn format_schedule(outcome: &ScheduleOutcome, employees: &[Employee]) -> String {
    let mut lines = Vec::new();
    for day in Day::ALL {
        lines.push(format!("{}:", day));
        for shift in Shift::ALL {
            let slot = outcome.grid.slot(day, shift);
            let names = if slot.is_empty() {
                "No employees assigned".to_string()
            } else {
                slot.iter()
                    .map(|&idx| employees[idx].name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            lines.push(format!("  {}: {}", shift, names));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Prints the weekly schedule and any staffing shortfalls.
pub fn print_schedule(outcome: &ScheduleOutcome, employees: &[Employee]) {
    println!("\n=== Final Weekly Schedule ===\n");
    println!("{}", format_schedule(outcome, employees));

    if !outcome.warnings.is_empty() {
        println!("Staffing shortfalls ({}):", outcome.warnings.len());
        for warning in &outcome.warnings {
            println!("  - {} {} is below minimum staffing", warning.day, warning.shift);
        }
    }
}

/// Writes the schedule rendering to a text file.
pub fn write_schedule_to_file(
    outcome: &ScheduleOutcome,
    employees: &[Employee],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    writeln!(file, "** Weekly Schedule **")?;
    writeln!(file)?;
    write!(file, "{}", format_schedule(outcome, employees))?;
    if !outcome.warnings.is_empty() {
        writeln!(file, "Staffing shortfalls:")?;
        for warning in &outcome.warnings {
            writeln!(file, "  - {} {}", warning.day, warning.shift)?;
        }
    }
    Ok(())
}
