use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use labref_core::evaluate_panel;
use labref_model::{PatientInfo, Sex};
use labref_report::{
    ExportFormat, ReportDocument, export_report, report_file_name, write_csv, write_json,
};
use labref_standards::load_bundled_reference_table;

fn patient(name: &str) -> PatientInfo {
    PatientInfo {
        name: name.to_string(),
        dni: "40998877".to_string(),
        age: 52.0,
        sex: Sex::Masculino,
        physician: "Dra. Vega".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    }
}

fn document_for(name: &str, panel: &str, entered: &[(&str, &str)]) -> ReportDocument {
    let table = load_bundled_reference_table().unwrap();
    let values: BTreeMap<String, String> = entered
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let patient = patient(name);
    let results = evaluate_panel(&table, panel, &patient, &values).unwrap();
    let generated_at = Utc.with_ymd_and_hms(2025, 6, 2, 15, 30, 0).unwrap();
    ReportDocument::new(patient, results, generated_at)
}

fn glucose_document() -> ReportDocument {
    document_for(
        "José Pérez Ríos",
        "Glucosa",
        &[("Glucosa en ayunas", "95"), ("Glucosa postprandial", "140")],
    )
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "labref-report-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

#[test]
fn csv_export_snapshot() {
    let document = glucose_document();
    let mut buffer = Vec::new();
    write_csv(&document, &mut buffer).unwrap();
    let csv = String::from_utf8(buffer).unwrap();
    insta::assert_snapshot!("glucose_csv", csv);
}

#[test]
fn json_export_carries_patient_and_counts() {
    let document = glucose_document();
    let mut buffer = Vec::new();
    write_json(&document, &mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["panel"], "Glucosa");
    assert_eq!(value["patient"]["sex"], "Masculino");
    assert_eq!(value["counts"]["in_range"], 1);
    assert_eq!(value["counts"]["out_of_range"], 1);
    assert_eq!(value["entries"][1]["range"]["kind"], "upper_bound_only");
    assert_eq!(value["entries"][1]["status"], "out_of_range");

    let round: ReportDocument = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(round, document);
}

#[test]
fn file_names_carry_patient_and_panel() {
    assert_eq!(
        report_file_name(&glucose_document(), ExportFormat::Json),
        "resultado_José_Pérez_Ríos_Glucosa.json"
    );
    assert_eq!(
        report_file_name(&document_for("  A/B  ", "Glucosa", &[]), ExportFormat::Csv),
        "resultado_AB_Glucosa.csv"
    );
    let mut unnamed = document_for("", "Glucosa", &[]);
    assert_eq!(report_file_name(&unnamed, ExportFormat::Csv), "resultado_Glucosa.csv");
    unnamed.panel.clear();
    assert_eq!(report_file_name(&unnamed, ExportFormat::Csv), "resultado.csv");
}

#[test]
fn panels_for_one_patient_get_separate_files() {
    let dir = unique_temp_dir("two-panels");
    let hemograma = document_for("Ana Torres", "Hemograma", &[("Hemoglobina", "13")]);
    let glucosa = document_for("Ana Torres", "Glucosa", &[("Glucosa en ayunas", "95")]);
    let first = export_report(&hemograma, &dir, &[ExportFormat::Json]).unwrap();
    let second = export_report(&glucosa, &dir, &[ExportFormat::Json]).unwrap();
    assert_ne!(first[0], second[0]);

    let saved: ReportDocument =
        serde_json::from_str(&fs::read_to_string(&first[0]).unwrap()).unwrap();
    assert_eq!(saved.panel, "Hemograma");
    let saved: ReportDocument =
        serde_json::from_str(&fs::read_to_string(&second[0]).unwrap()).unwrap();
    assert_eq!(saved.panel, "Glucosa");
}

#[test]
fn export_writes_each_format() {
    let dir = unique_temp_dir("export");
    let document = glucose_document();
    let written =
        export_report(&document, &dir, &[ExportFormat::Json, ExportFormat::Csv]).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("resultado_José_Pérez_Ríos_Glucosa.json"));
    let csv = fs::read_to_string(&written[1]).unwrap();
    assert!(csv.starts_with("analyte,result,unit,reference_range,status"));
    assert!(document.has_out_of_range());
}
