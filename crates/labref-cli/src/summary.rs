use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labref_model::ResultStatus;
use labref_report::{HistoryStore, ReportDocument};

use crate::types::{SessionResult, SubmissionReport};

pub fn print_session(result: &SessionResult) {
    for report in &result.reports {
        print_report(report);
    }
    print_history(&result.history);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_report(report: &SubmissionReport) {
    let document = &report.document;
    let patient = &document.patient;
    println!("Source: {}", report.source.display());
    println!(
        "Paciente: {}    DNI: {}    Edad: {}    Sexo: {}",
        patient.name, patient.dni, patient.age, patient.sex
    );
    println!("Médico: {}    Fecha: {}", patient.physician, patient.date);
    println!("Panel: {}", document.panel);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Análisis"),
        header_cell("Resultado"),
        header_cell("Unidad"),
        header_cell("Valores normales"),
        header_cell("Estado"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &document.entries {
        table.add_row(vec![
            Cell::new(&entry.analyte),
            value_cell(&entry.entered_value, entry.status),
            Cell::new(&entry.unit),
            Cell::new(&entry.range_display),
            status_cell(entry.status),
        ]);
    }
    println!("{table}");
    for path in &report.written {
        println!("Written: {}", path.display());
    }
    println!();
}

fn print_history(history: &HistoryStore) {
    if history.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Saved"),
        header_cell("Paciente"),
        header_cell("Panel"),
        header_cell("Normal"),
        header_cell("Fuera de rango"),
        header_cell("Sin resultado"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for entry in history.entries() {
        let document: &ReportDocument = &entry.document;
        table.add_row(vec![
            Cell::new(entry.saved_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(&document.patient.name),
            Cell::new(&document.panel),
            count_cell(document.counts.in_range, Color::Green),
            count_cell(document.counts.out_of_range, Color::Yellow),
            count_cell(document.counts.unparseable, Color::DarkGrey),
        ]);
    }
    println!("Historial de la sesión ({} reports)", history.len());
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &str, status: ResultStatus) -> Cell {
    let cell = Cell::new(value);
    match status {
        ResultStatus::InRange => cell.fg(Color::Green),
        ResultStatus::OutOfRange => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
        ResultStatus::Unparseable => cell.fg(Color::DarkGrey),
    }
}

fn status_cell(status: ResultStatus) -> Cell {
    let text = format!("{} {}", status.indicator(), status.label());
    let cell = Cell::new(text.trim());
    match status {
        ResultStatus::InRange => cell.fg(Color::Green),
        ResultStatus::OutOfRange => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
        ResultStatus::Unparseable => cell.fg(Color::DarkGrey).add_attribute(Attribute::Dim),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(color)
    }
}
