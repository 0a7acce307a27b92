// Plain text views of workers and shifts for the console.

use chrono::TimeDelta;

use crate::modules::shifts::core::dto::ShiftResponse;
use crate::modules::workers::core::dto::WorkerResponse;
use crate::shared::core::validation::DATE_FORMAT;

const NOT_AVAILABLE: &str = "Not available";

/// `HH:MM`, hours not wrapped at a day.
pub fn format_duration(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

fn or_not_available(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Fixed width table with a header rule.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect();
        format!("| {} |", padded.join(" | "))
    };
    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = vec![rule.clone(), line(headers.to_vec()), rule.clone()];
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(rule);
    out.join("\n")
}

pub fn workers_table(workers: &[WorkerResponse]) -> String {
    let rows: Vec<Vec<String>> = workers
        .iter()
        .map(|w| {
            vec![
                w.id.to_string(),
                w.name.clone(),
                w.department.clone(),
                or_not_available(&w.email).to_string(),
                or_not_available(&w.phone).to_string(),
            ]
        })
        .collect();
    let headers = [
        "Id",
        "Name",
        "Department",
        "Email address",
        "Telephone number",
    ];
    format!("Workers\n{}", table(&headers, &rows))
}

pub fn shifts_table(shifts: &[ShiftResponse]) -> String {
    let rows: Vec<Vec<String>> = shifts
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.worker_id.to_string(),
                s.worker_name.clone(),
                s.worker_department.clone(),
                s.start_time.format(DATE_FORMAT).to_string(),
                s.end_time.format(DATE_FORMAT).to_string(),
                format_duration(s.duration),
            ]
        })
        .collect();
    let headers = [
        "Id",
        "Worker Id",
        "Worker Name",
        "Worker Department",
        "Shift Start Time",
        "Shift End Time",
        "Shift Duration",
    ];
    format!("Shifts\n{}", table(&headers, &rows))
}

pub fn worker_summary(worker: &WorkerResponse) -> String {
    [
        format!("Information for worker {}:", worker.id),
        format!("Name: {}", worker.name),
        format!("Department: {}", worker.department),
        format!("Email Address: {}", or_not_available(&worker.email)),
        format!("Telephone Number: {}", or_not_available(&worker.phone)),
    ]
    .join("\n")
}

pub fn shift_summary(shift: &ShiftResponse) -> String {
    [
        format!("Information for shift {}:", shift.id),
        format!("Worker id: {}", shift.worker_id),
        format!("Worker name: {}", shift.worker_name),
        format!("Worker department: {}", shift.worker_department),
        format!("Shift start time: {}", shift.start_time.format(DATE_FORMAT)),
        format!("Shift end time: {}", shift.end_time.format(DATE_FORMAT)),
        format!("Shift duration: {}", format_duration(shift.duration)),
    ]
    .join("\n")
}
