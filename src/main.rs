mod display;
mod engine;
mod parser;
mod web;

use display::{print_schedule, write_schedule_to_file};
use engine::{run_scheduler, ShiftConfig};
use parser::load_employees;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the site at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode: load a roster CSV, schedule the week, print and save it
    let csv_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("data/employees.csv");

    println!("Loading roster from {}...", csv_path);
    let mut employees = load_employees(csv_path)?;
    println!("Loaded {} employees (resubmissions merged)", employees.len());

    println!("\n=== Running Shift Scheduler ===");
    let config = ShiftConfig::default();
    let mut rng = rand::thread_rng();
    let outcome = run_scheduler(&mut employees, &config, &mut rng);

    print_schedule(&outcome, &employees);

    let out_path = "schedule_week.txt";
    write_schedule_to_file(&outcome, &employees, out_path)?;
    println!("Schedule saved to {}", out_path);

    Ok(())
}
