use super::*;
use time::macros::{date, datetime};

fn filled_draft() -> IntakeDraft {
    IntakeDraft {
        customer: " Ayşe Arslan ".to_owned(),
        phone: "0555 222 33 44".to_owned(),
        brand: "Huawei".to_owned(),
        model: "P30".to_owned(),
        serial: "HW-P30-1".to_owned(),
        issue: "Hoparlör cızırtılı".to_owned(),
        technician: None,
        status: None,
    }
}

// =============================================================
// validation
// =============================================================

#[test]
fn empty_draft_misses_all_required_fields_in_order() {
    let err = IntakeDraft::default().validate().expect_err("blank draft is invalid");
    assert_eq!(
        err,
        IntakeError::MissingFields(vec![
            IntakeField::Customer,
            IntakeField::Phone,
            IntakeField::Brand,
            IntakeField::Model,
        ])
    );
}

#[test]
fn whitespace_counts_as_missing() {
    let draft = IntakeDraft { phone: "   ".to_owned(), ..filled_draft() };
    assert_eq!(draft.missing_fields(), vec![IntakeField::Phone]);
}

#[test]
fn serial_and_issue_are_optional() {
    let draft = IntakeDraft { serial: String::new(), issue: String::new(), ..filled_draft() };
    assert!(draft.validate().is_ok());
}

#[test]
fn missing_fields_error_message_lists_labels() {
    let err = IntakeError::MissingFields(vec![IntakeField::Brand, IntakeField::Model]);
    assert_eq!(err.to_string(), "missing required fields: Marka, Model");
}

// =============================================================
// tracking ids
// =============================================================

#[test]
fn next_id_starts_at_one_for_new_day() {
    let store = TicketStore::with_sample_data();
    assert_eq!(next_tracking_id(&store, date!(2025-08-20)), "TRK-250820-001");
}

#[test]
fn next_id_continues_after_highest_for_day() {
    let store = TicketStore::with_sample_data();
    assert_eq!(next_tracking_id(&store, date!(2024-08-13)), "TRK-240813-003");
    assert_eq!(next_tracking_id(&store, date!(2024-08-12)), "TRK-240812-009");
}

#[test]
fn next_id_ignores_malformed_suffixes() {
    let mut store = TicketStore::default();
    let mut ticket = TicketStore::with_sample_data().list()[0].clone();
    ticket.id = "TRK-240813-XYZ".to_owned();
    store.insert(ticket).expect("insert");
    assert_eq!(next_tracking_id(&store, date!(2024-08-13)), "TRK-240813-001");
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_ticket_with_defaults() {
    let mut store = TicketStore::with_sample_data();
    let now = datetime!(2025-08-20 14:05);

    let id = submit(&mut store, filled_draft(), now).expect("submit should succeed");

    assert_eq!(id, "TRK-250820-001");
    let ticket = store.list().last().expect("appended ticket");
    assert_eq!(ticket.id, id);
    assert_eq!(ticket.customer, "Ayşe Arslan");
    assert_eq!(ticket.status, "geldi");
    assert_eq!(ticket.assigned, "");
    assert_eq!(ticket.cost, 0);
    assert_eq!(ticket.created_at, now);
    assert_eq!(ticket.eta, date!(2025-08-23));
}

#[test]
fn submit_keeps_chosen_status_and_technician() {
    let mut store = TicketStore::with_sample_data();
    let draft = IntakeDraft {
        technician: Some("Zeynep".to_owned()),
        status: Some("parca".to_owned()),
        ..filled_draft()
    };

    let id = submit(&mut store, draft, datetime!(2025-08-20 09:00)).expect("submit should succeed");
    let ticket = store.get(&id).expect("stored ticket");
    assert_eq!(ticket.assigned, "Zeynep");
    assert_eq!(ticket.status, "parca");
}

#[test]
fn consecutive_submits_get_unique_ids() {
    let mut store = TicketStore::with_sample_data();
    let now = datetime!(2025-08-20 09:00);

    let a = submit(&mut store, filled_draft(), now).expect("first submit");
    let b = submit(&mut store, filled_draft(), now).expect("second submit");

    assert_eq!(a, "TRK-250820-001");
    assert_eq!(b, "TRK-250820-002");
    assert_eq!(store.len(), 5);
}

#[test]
fn invalid_submit_leaves_store_untouched() {
    let mut store = TicketStore::with_sample_data();
    let before = store.clone();
    let draft = IntakeDraft { customer: String::new(), ..filled_draft() };

    let err = submit(&mut store, draft, datetime!(2025-08-20 09:00)).expect_err("should fail");
    assert_eq!(err, IntakeError::MissingFields(vec![IntakeField::Customer]));
    assert_eq!(store, before);
}

#[test]
fn saturated_day_counter_does_not_overflow() {
    let mut ticket = TicketStore::with_sample_data().list()[0].clone();
    ticket.id = format!("TRK-250820-{}", u32::MAX);
    let mut store = TicketStore::new(vec![ticket]);

    assert_eq!(next_tracking_id(&store, date!(2025-08-20)), format!("TRK-250820-{}", u32::MAX));

    let err = submit(&mut store, filled_draft(), datetime!(2025-08-20 09:00)).expect_err("id is taken");
    assert!(matches!(err, IntakeError::Store(StoreError::DuplicateId(_))));
    assert_eq!(store.len(), 1);
}
