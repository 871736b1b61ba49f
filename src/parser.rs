use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::Reader;

use crate::engine::{Day, Employee, Shift};

/// Parses a comma-separated preference string ("morning, evening") into an
/// ordered shift list. Case-insensitive and whitespace-tolerant. Rejects
/// empty lists, unknown shift names, and repeats; the engine assumes all
/// three hold and never re-validates.
pub fn parse_preference_list(raw: &str) -> Result<Vec<Shift>, String> {
    let mut shifts = Vec::new();
    for part in raw.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let shift = Shift::from_str(trimmed)?;
        if shifts.contains(&shift) {
            return Err(format!("Repeated shift in preference list: {}", trimmed));
        }
        shifts.push(shift);
    }
    if shifts.is_empty() {
        return Err("Preference list cannot be empty".to_string());
    }
    Ok(shifts)
}

/// Builds an employee from a name and one preference string per day.
/// Every day of the week must be present.
pub fn build_employee(
    name: &str,
    day_preferences: &HashMap<Day, String>,
) -> Result<Employee, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Employee name cannot be empty".to_string());
    }

    let mut preferences = HashMap::new();
    for day in Day::ALL {
        let raw = day_preferences
            .get(&day)
            .ok_or_else(|| format!("Missing preferences for {}", day))?;
        let prefs = parse_preference_list(raw)
            .map_err(|e| format!("Invalid preferences for {}: {}", day, e))?;
        preferences.insert(day, prefs);
    }

    Ok(Employee::new(name, preferences))
}

/// Loads a roster from CSV: one row per employee with a name column and one
/// column per weekday holding a comma-separated preference list. Columns are
/// located by header name. A row re-using an earlier name replaces that
/// employee in place, so input order (which decides who has first claim on
/// scarce slots) is preserved.
pub fn parse_employees<R: Read>(reader: R) -> Result<Vec<Employee>, Box<dyn std::error::Error>> {
    let mut csv_reader = Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_col = headers
        .iter()
        .position(|h| h.trim().to_lowercase().contains("name"))
        .ok_or("CSV is missing a name column")?;
    let mut day_cols = HashMap::new();
    for day in Day::ALL {
        let col = headers
            .iter()
            .position(|h| h.trim().to_lowercase() == day.as_str().to_lowercase())
            .ok_or_else(|| format!("CSV is missing a {} column", day))?;
        day_cols.insert(day, col);
    }

    let mut employees: Vec<Employee> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue; // Skip incomplete records
        }

        let mut day_preferences = HashMap::new();
        for day in Day::ALL {
            let raw = day_cols
                .get(&day)
                .and_then(|&col| record.get(col))
                .unwrap_or("")
                .to_string();
            day_preferences.insert(day, raw);
        }

        let employee = build_employee(&name, &day_preferences)
            .map_err(|e| format!("Row for {}: {}", name, e))?;

        // Resubmission: replace in place rather than append.
        if let Some(existing) = employees.iter_mut().find(|e| e.name == employee.name) {
            *existing = employee;
        } else {
            employees.push(employee);
        }
    }

    if employees.is_empty() {
        return Err("Roster is empty: no usable employee rows found".into());
    }

    Ok(employees)
}

/// Loads a roster from a CSV file on disk.
pub fn load_employees<P: AsRef<Path>>(
    csv_path: P,
) -> Result<Vec<Employee>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(csv_path)?;
    parse_employees(file)
}
