use chrono::NaiveDate;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn interval(start: NaiveDate, end: NaiveDate) -> DateInterval {
    DateInterval::new(start, end).unwrap()
}

fn config() -> EditorConfig {
    EditorConfig {
        roles: vec!["Developer".to_string(), "Tester".to_string()],
        ..EditorConfig::default()
    }
}

fn alice() -> HumanResource {
    let roles = config().role_registry();
    let mut person = HumanResource::new(Some(7), "Alice");
    person.phone = "555-0100".to_string();
    person.mail = "alice@example.com".to_string();
    person.role = roles.find_role("Developer").cloned();
    person.add_days_off(DaysOff::new(date(2025, 1, 1), date(2025, 1, 3)));
    person
}

#[test]
fn test_open_loads_person_fields() {
    let person = alice();
    let dialog = PersonDialog::open(&person, &config()).unwrap();

    assert!(dialog.is_open());
    assert!(!dialog.result());
    assert!(!dialog.has_unsaved_changes());
    assert_eq!(dialog.fields().name.value(), "Alice");
    assert_eq!(dialog.fields().phone.value(), "555-0100");
    assert_eq!(dialog.fields().mail.value(), "alice@example.com");
    assert_eq!(dialog.fields().role.value(), Some("Developer"));
    assert_eq!(dialog.days_off().intervals(), &[interval(date(2025, 1, 1), date(2025, 1, 3))]);
    assert_eq!(dialog.days_off().max_interval_length(), Some(2));
}

#[test]
fn test_edit_ok_undo_redo() {
    let mut person = alice();
    let original = person.clone();
    let mut history = EditHistory::new();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();

    let fields = dialog.fields_mut().unwrap();
    assert!(fields.name.set_value("Alicia").is_ok());
    assert!(fields.role.set_value("Tester").is_ok());
    assert!(dialog.add_days_off(interval(date(2025, 1, 4), date(2025, 1, 5))).is_ok());
    assert!(dialog.add_days_off(interval(date(2025, 1, 10), date(2025, 1, 12))).is_ok());
    assert!(dialog.has_unsaved_changes());
    println!("Before ok: {dialog:#?}");

    assert!(dialog.ok(&mut person, &mut history).is_ok());
    assert!(dialog.result());
    assert!(!dialog.has_unsaved_changes());
    assert_eq!(person.name, "Alicia");
    assert_eq!(person.role.as_ref().map(|r| r.name.as_str()), Some("Tester"));
    assert_eq!(
        person.days_off(),
        &[
            DaysOff::new(date(2025, 1, 1), date(2025, 1, 5)),
            DaysOff::new(date(2025, 1, 10), date(2025, 1, 12)),
        ]
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history.undo_description(), Some(RESOURCE_EDIT_DESCRIPTION));
    println!("After ok: {person:#?}");

    assert!(history.undo(&mut person).is_ok());
    assert_eq!(person, original);

    assert!(history.redo(&mut person).is_ok());
    assert_eq!(person.name, "Alicia");
    assert_eq!(person.days_off().len(), 2);
}

#[test]
fn test_new_person_skips_undo_manager() {
    let mut person = HumanResource::new(None, "");
    let mut history = EditHistory::new();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();

    assert!(dialog.fields_mut().unwrap().name.set_value("Bob").is_ok());
    assert!(dialog.add_days_off(interval(date(2025, 5, 1), date(2025, 5, 2))).is_ok());
    assert!(dialog.ok(&mut person, &mut history).is_ok());

    assert_eq!(person.name, "Bob");
    assert_eq!(person.days_off(), &[DaysOff::new(date(2025, 5, 1), date(2025, 5, 2))]);
    assert!(history.is_empty());
}

#[test]
fn test_cancel_leaves_person_untouched() {
    let person = alice();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();

    assert!(dialog.fields_mut().unwrap().mail.set_value("alice@elsewhere.org").is_ok());
    assert!(dialog.remove_days_off(&interval(date(2025, 1, 1), date(2025, 1, 3))).is_ok());
    assert!(dialog.has_unsaved_changes());

    assert!(dialog.cancel().is_ok());
    assert!(!dialog.result());
    assert!(!dialog.has_unsaved_changes());
    assert_eq!(dialog.fields().mail.value(), "alice@example.com");
    assert_eq!(dialog.days_off().len(), 1);
    assert_eq!(person, alice());
}

#[test]
fn test_closed_dialog_rejects_edits() {
    let mut person = alice();
    let mut history = EditHistory::new();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();
    assert!(dialog.ok(&mut person, &mut history).is_ok());

    assert_eq!(dialog.add_days_off(interval(date(2025, 2, 1), date(2025, 2, 1))), Err(DialogError::Closed));
    assert!(matches!(dialog.fields_mut(), Err(DialogError::Closed)));
    assert_eq!(dialog.cancel(), Err(DialogError::Closed));
    assert_eq!(dialog.ok(&mut person, &mut history), Err(DialogError::Closed));
    assert!(dialog.result());
    assert_eq!(history.len(), 1);
}

#[test]
fn test_rejected_days_off_surface_errors() {
    let person = alice();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();

    let too_long = interval(date(2025, 3, 1), date(2025, 3, 6));
    assert!(matches!(
        dialog.add_days_off(too_long),
        Err(DialogError::Interval(IntervalError::TooLong { .. }))
    ));
    let missing = interval(date(2025, 1, 2), date(2025, 1, 3));
    assert_eq!(
        dialog.remove_days_off(&missing),
        Err(DialogError::Interval(IntervalError::NotFound(missing)))
    );
    assert!(!dialog.has_unsaved_changes());
}

#[test]
fn test_unbounded_config_accepts_long_interval() {
    let person = alice();
    let config = EditorConfig::from_yaml_str("max_interval_length: null\nroles: [Developer, Tester]").unwrap();
    let mut dialog = PersonDialog::open(&person, &config).unwrap();

    assert!(dialog.add_days_off(interval(date(2025, 7, 1), date(2025, 7, 21))).is_ok());
    assert_eq!(dialog.days_off().len(), 2);
}

#[test]
fn test_unknown_role_keeps_previous_role() {
    let mut person = alice();
    let mut history = EditHistory::new();
    // "Developer" is no longer enabled
    let config = EditorConfig::from_yaml_str("roles: [Tester]").unwrap();
    let mut dialog = PersonDialog::open(&person, &config).unwrap();
    assert_eq!(dialog.fields().role.value(), None);

    assert!(dialog.ok(&mut person, &mut history).is_ok());
    assert_eq!(person.role.as_ref().map(|r| r.name.as_str()), Some("Developer"));
}

#[test]
fn test_malformed_days_off_record() {
    let mut person = alice();
    person.add_days_off(DaysOff::new(date(2025, 4, 10), date(2025, 4, 1)));

    let result = PersonDialog::open(&person, &config());
    assert!(matches!(result, Err(DialogError::Interval(IntervalError::InvalidRange { .. }))));
}

#[test]
fn test_roles_come_from_config() {
    let person = alice();
    let dialog = PersonDialog::open(&person, &config()).unwrap();
    assert_eq!(dialog.fields().role.available_values(), &["Developer".to_string(), "Tester".to_string()]);

    let dialog = PersonDialog::open(&person, &EditorConfig::default()).unwrap();
    assert!(dialog.fields().role.available_values().is_empty());
    assert_eq!(dialog.fields().role.value(), None);
}

#[test]
fn test_reverted_edits_are_not_unsaved_changes() {
    let person = alice();
    let mut dialog = PersonDialog::open(&person, &config()).unwrap();

    let extra = interval(date(2025, 2, 10), date(2025, 2, 11));
    assert!(dialog.add_days_off(extra).is_ok());
    assert!(dialog.has_unsaved_changes());
    assert!(dialog.remove_days_off(&extra).is_ok());
    assert!(!dialog.has_unsaved_changes());

    assert!(dialog.add_days_off(interval(date(2025, 1, 2), date(2025, 1, 3))).is_ok());
    assert!(!dialog.has_unsaved_changes());

    assert!(dialog.fields_mut().unwrap().name.set_value("Alicia").is_ok());
    assert!(dialog.has_unsaved_changes());
    assert!(dialog.fields_mut().unwrap().name.set_value("Alice").is_ok());
    assert!(!dialog.has_unsaved_changes());
}
