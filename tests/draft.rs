use serde_json::json;
use tallies_core::constants::{COUNTER_TEMPLATES, DEFAULT_COUNTER_COLOR};
use tallies_core::{CounterDraft, Field, NumericInput, ValidationError, check_drafts};

fn fields(draft: &CounterDraft) -> Vec<Field> {
    draft.validate().into_iter().map(|e| e.field).collect()
}

fn named(name: &str) -> CounterDraft {
    CounterDraft {
        name: Some(name.to_owned()),
        ..Default::default()
    }
}

#[test]
fn templates_make_valid_drafts() {
    for template in &COUNTER_TEMPLATES {
        let draft = CounterDraft::from(template);
        assert!(draft.is_valid(), "{}", template.name);
        assert_eq!(
            draft.target,
            Some(NumericInput::Number(f64::from(template.target)))
        );
    }
}

#[test]
fn every_failing_field_is_reported_in_form_order() {
    let draft = CounterDraft {
        name: Some("   ".to_owned()),
        icon: None,
        target: Some(NumericInput::Number(-3.0)),
        increment: Some(NumericInput::Text("0".to_owned())),
        color: Some("blue".to_owned()),
    };
    assert_eq!(
        fields(&draft),
        vec![Field::Name, Field::Target, Field::Increment, Field::Color]
    );

    let errors = draft.validate();
    assert_eq!(errors[1].error, ValidationError::TargetNegative);
    assert_eq!(errors[2].error, ValidationError::IncrementNotPositive);
}

#[test]
fn missing_name_is_empty_and_optional_fields_may_be_absent() {
    assert_eq!(fields(&CounterDraft::default()), vec![Field::Name]);
    assert!(named("Water").is_valid());
}

#[test]
fn sanitized_trims_name_and_defaults_color() {
    let draft = named("  Water  ");
    let clean = draft.sanitized();
    assert_eq!(clean.name.as_deref(), Some("Water"));
    assert_eq!(clean.color.as_deref(), Some(DEFAULT_COUNTER_COLOR));

    let colored = CounterDraft {
        color: Some("#FF3B30".to_owned()),
        ..draft
    };
    assert_eq!(colored.sanitized().color.as_deref(), Some("#FF3B30"));
}

#[test]
fn drafts_deserialize_from_mixed_json() {
    let drafts: Vec<CounterDraft> = serde_json::from_value(json!([
        { "name": "Steps", "target": "10000", "increment": 100, "color": "#34C759" },
        { "name": "Reading", "target": 5.5 },
    ]))
    .unwrap();

    assert!(drafts[0].is_valid());
    assert_eq!(fields(&drafts[1]), vec![Field::Target]);
}

#[test]
fn field_errors_serialize_with_messages() {
    let json = serde_json::to_value(named("").validate()).unwrap();
    assert_eq!(
        json,
        json!([{ "field": "name", "error": "Counter name cannot be empty" }])
    );
}

#[test]
fn batch_reports_keep_order_and_sanitized_names() {
    let drafts = [named(" Water "), named(""), CounterDraft::from(&COUNTER_TEMPLATES[1])];
    let reports = check_drafts(&drafts);

    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(reports[0].name.as_deref(), Some("Water"));
    assert!(reports[0].valid && reports[0].errors.is_empty());
    assert!(!reports[1].valid);
    assert_eq!(reports[1].errors[0].error, ValidationError::NameEmpty);
    assert_eq!(reports[2].name.as_deref(), Some("Steps"));
    assert!(reports[2].valid);
}

#[test]
fn batch_report_serializes_for_the_cli() {
    let json = serde_json::to_value(check_drafts(&[named("")])).unwrap();
    assert_eq!(
        json,
        json!([{
            "index": 0,
            "name": "",
            "valid": false,
            "errors": [{ "field": "name", "error": "Counter name cannot be empty" }],
        }])
    );
}

#[test]
fn empty_batch_has_no_reports() {
    assert!(check_drafts(&[]).is_empty());
}
