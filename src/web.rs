use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{
    run_scheduler, Day, Employee, ScheduleOutcome, Shift, ShiftConfig, StaffingWarning,
};
use crate::parser::{build_employee, parse_employees};

/// In-memory roster and the latest scheduling result. One mutex guards both
/// so a run never overlaps another run or a roster edit.
pub struct AppState {
    pub scheduler: Mutex<SchedulerState>,
}

#[derive(Default)]
pub struct SchedulerState {
    pub employees: Vec<Employee>,
    pub outcome: Option<ScheduleOutcome>,
}

/// One employee as submitted from the front end: a name plus a raw
/// comma-separated preference string per day.
#[derive(Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub preferences: HashMap<Day, String>,
}

#[derive(Serialize)]
pub struct ShiftSlot {
    shift: Shift,
    employees: Vec<String>,
}

#[derive(Serialize)]
pub struct DayRow {
    day: Day,
    shifts: Vec<ShiftSlot>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    generated_at: String,
    days: Vec<DayRow>,
    warnings: Vec<StaffingWarning>,
}

fn grid_response(outcome: &ScheduleOutcome, employees: &[Employee]) -> ScheduleResponse {
    let days = Day::ALL
        .into_iter()
        .map(|day| DayRow {
            day,
            shifts: Shift::ALL
                .into_iter()
                .map(|shift| ShiftSlot {
                    shift,
                    employees: outcome
                        .grid
                        .slot(day, shift)
                        .iter()
                        .map(|&idx| employees[idx].name.clone())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ScheduleResponse {
        generated_at: chrono::Utc::now().to_rfc3339(),
        days,
        warnings: outcome.warnings.clone(),
    }
}

// Replace the roster with employees submitted as JSON
async fn submit_roster(
    req: web::Json<Vec<EmployeeForm>>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"success": false, "error": "Roster cannot be empty"})));
    }

    let mut employees: Vec<Employee> = Vec::new();
    for form in req.iter() {
        match build_employee(&form.name, &form.preferences) {
            Ok(employee) => {
                // Resubmitted names replace the earlier entry in place.
                if let Some(existing) = employees.iter_mut().find(|e| e.name == employee.name) {
                    *existing = employee;
                } else {
                    employees.push(employee);
                }
            }
            Err(e) => {
                return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                    "success": false,
                    "error": format!("{}: {}", form.name, e)
                })));
            }
        }
    }

    let mut scheduler = state.scheduler.lock().unwrap();
    scheduler.employees = employees;
    scheduler.outcome = None;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "employees": scheduler.employees.len()
    })))
}

// Replace the roster from an uploaded CSV body
async fn upload_roster(body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse> {
    match parse_employees(body.as_ref()) {
        Ok(employees) => {
            let mut scheduler = state.scheduler.lock().unwrap();
            scheduler.employees = employees;
            scheduler.outcome = None;
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "employees": scheduler.employees.len()
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!("Failed to process CSV: {}", e)
        }))),
    }
}

// Current roster names, in input order
async fn get_roster(state: web::Data<AppState>) -> Result<HttpResponse> {
    let scheduler = state.scheduler.lock().unwrap();
    let names: Vec<&str> = scheduler.employees.iter().map(|e| e.name.as_str()).collect();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "employees": names })))
}

// Run the three-pass engine over the stored roster
async fn run_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut scheduler = state.scheduler.lock().unwrap();
    if scheduler.employees.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"success": false, "error": "No roster loaded"})));
    }

    let config = ShiftConfig::default();
    let mut rng = rand::thread_rng();
    let outcome = run_scheduler(&mut scheduler.employees, &config, &mut rng);
    let response = grid_response(&outcome, &scheduler.employees);
    scheduler.outcome = Some(outcome);

    Ok(HttpResponse::Ok().json(response))
}

// Latest schedule, if one has been generated
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let scheduler = state.scheduler.lock().unwrap();
    match &scheduler.outcome {
        Some(outcome) => {
            Ok(HttpResponse::Ok().json(grid_response(outcome, &scheduler.employees)))
        }
        None => Ok(HttpResponse::NotFound()
            .json(serde_json::json!({"error": "No schedule generated yet"}))),
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        scheduler: Mutex::new(SchedulerState::default()),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .route("/api/roster", web::post().to(submit_roster))
            .route("/api/roster", web::get().to(get_roster))
            .route("/api/upload", web::post().to(upload_roster))
            .route("/api/schedule", web::post().to(run_schedule))
            .route("/api/schedule", web::get().to(get_schedule))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
