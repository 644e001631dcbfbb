use chrono::{Duration, NaiveDate, TimeZone, Utc};
use labref_core::PanelResults;
use labref_model::{PatientInfo, Sex};
use labref_report::{HistoryStore, ReportDocument};

fn document(name: &str, dni: &str) -> ReportDocument {
    let patient = PatientInfo {
        name: name.to_string(),
        dni: dni.to_string(),
        age: 8.0,
        sex: Sex::Femenino,
        physician: String::new(),
        date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
    };
    let results = PanelResults {
        panel: "Hemograma".to_string(),
        entries: Vec::new(),
    };
    ReportDocument::new(patient, results, Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap())
}

#[test]
fn history_appends_in_save_order() {
    let start = Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap();
    let mut history = HistoryStore::new();
    assert!(history.is_empty());
    assert!(history.latest().is_none());

    history.save(document("Lucía", "111"), start);
    history.save(document("Mateo", "222"), start + Duration::minutes(5));
    history.save(document("Lucía", "111"), start + Duration::minutes(9));

    assert_eq!(history.len(), 3);
    let names: Vec<&str> = history
        .entries()
        .iter()
        .map(|entry| entry.document.patient.name.as_str())
        .collect();
    assert_eq!(names, vec!["Lucía", "Mateo", "Lucía"]);
    assert_eq!(history.latest().unwrap().saved_at, start + Duration::minutes(9));
    assert_eq!(history.for_patient("111").count(), 2);
    assert_eq!(
        history
            .get(start + Duration::minutes(5))
            .map(|entry| entry.document.patient.dni.as_str()),
        Some("222")
    );
}

#[test]
fn clearing_ends_the_session() {
    let mut history = HistoryStore::new();
    history.save(document("Lucía", "111"), Utc::now());
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.for_patient("111").count(), 0);
}
