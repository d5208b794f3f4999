use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use wats::api::{AverageWeight, CmdMessage, MessageLevel};
use wats::model::AnimalRecord;

const HEADERS: [&str; 7] = [
    "Tag ID", "Species", "Name", "Age", "Gender", "Weight", "Health",
];
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn cells(record: &AnimalRecord) -> [String; 7] {
    [
        record.id().to_string(),
        record.species().to_string(),
        record.name().to_string(),
        record.age().to_string(),
        record.gender().to_string(),
        format!("{:.2}", record.weight()),
        record.health_status().to_string(),
    ]
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    format!("{}\n", line.trim_end())
}

pub(super) fn render_record_table(records: &[AnimalRecord]) -> String {
    if records.is_empty() {
        return "No animal records found.\n".to_string();
    }

    let rows: Vec<[String; 7]> = records.iter().map(cells).collect();
    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = render_row(&headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&render_row(&rule, &widths));
    for row in &rows {
        output.push_str(&render_row(row, &widths));
    }
    output
}

pub(super) fn render_records_json(records: &[AnimalRecord]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

pub(super) fn render_record(record: &AnimalRecord) -> String {
    format!("{}\n", record)
}

pub(super) fn render_average(average: &AverageWeight) -> String {
    format!(
        "Average weight for species '{}': {:.2} kg\n",
        average.species, average.mean
    )
}
