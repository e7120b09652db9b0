use super::*;
use crate::status;

fn ids(store: &TicketStore) -> Vec<&str> {
    store.list().iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// list / get
// =============================================================

#[test]
fn sample_store_lists_in_insertion_order() {
    let store = TicketStore::with_sample_data();
    assert_eq!(ids(&store), vec!["TRK-240813-001", "TRK-240813-002", "TRK-240812-008"]);
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn sample_store_only_uses_registered_statuses() {
    let store = TicketStore::with_sample_data();
    for ticket in store.list() {
        assert!(status::lookup(&ticket.status).is_some(), "{} has unknown status", ticket.id);
    }
}

#[test]
fn default_store_is_empty() {
    let store = TicketStore::default();
    assert!(store.is_empty());
    assert!(store.get("TRK-240813-001").is_none());
}

#[test]
fn get_is_exact_match() {
    let store = TicketStore::with_sample_data();
    assert!(store.get("TRK-240813-002").is_some());
    assert!(store.get("trk-240813-002").is_none());
}

// =============================================================
// move_status
// =============================================================

#[test]
fn move_status_replaces_only_status() {
    let mut store = TicketStore::with_sample_data();
    let before = store.get("TRK-240813-002").cloned().expect("sample ticket");

    assert!(store.move_status("TRK-240813-002", "tamir"));

    let after = store.get("TRK-240813-002").expect("sample ticket");
    assert_eq!(after.status, "tamir");
    assert_eq!(after.cost, 1800);
    assert_eq!(Ticket { status: before.status.clone(), ..after.clone() }, before);
}

#[test]
fn move_status_preserves_position_and_uniqueness() {
    let mut store = TicketStore::with_sample_data();
    store.move_status("TRK-240813-001", "teslim");

    assert_eq!(ids(&store), vec!["TRK-240813-001", "TRK-240813-002", "TRK-240812-008"]);
    let matching = store.list().iter().filter(|t| t.id == "TRK-240813-001").count();
    assert_eq!(matching, 1);
}

#[test]
fn move_status_unknown_id_is_noop() {
    let mut store = TicketStore::with_sample_data();
    let before = store.clone();

    assert!(!store.move_status("TRK-000000-000", "hazir"));
    assert_eq!(store, before);
}

#[test]
fn move_status_allows_backward_moves() {
    let mut store = TicketStore::with_sample_data();
    assert!(store.move_status("TRK-240812-008", "geldi"));
    assert_eq!(store.get("TRK-240812-008").map(|t| t.status.as_str()), Some("geldi"));
}

#[test]
fn move_status_accepts_unknown_key() {
    let mut store = TicketStore::with_sample_data();
    assert!(store.move_status("TRK-240813-001", "arsiv"));

    let ticket = store.get("TRK-240813-001").expect("sample ticket");
    assert_eq!(ticket.status, "arsiv");
    assert!(ticket.status_info().is_none());
}

// =============================================================
// insert
// =============================================================

#[test]
fn insert_appends_at_end() {
    let mut store = TicketStore::with_sample_data();
    let mut ticket = store.list()[0].clone();
    ticket.id = "TRK-250101-001".to_owned();

    store.insert(ticket).expect("insert should succeed");
    assert_eq!(ids(&store).last(), Some(&"TRK-250101-001"));
    assert_eq!(store.len(), 4);
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut store = TicketStore::with_sample_data();
    let dup = store.list()[1].clone();

    let err = store.insert(dup).expect_err("duplicate should fail");
    assert_eq!(err, StoreError::DuplicateId("TRK-240813-002".to_owned()));
    assert_eq!(store.len(), 3);
}

#[test]
fn insert_rejects_id_differing_only_in_case() {
    let mut store = TicketStore::with_sample_data();
    let mut ticket = store.list()[0].clone();
    ticket.id = "trk-240813-001".to_owned();
    ticket.customer = "Başka Müşteri".to_owned();

    let err = store.insert(ticket).expect_err("case-folded duplicate should fail");
    assert_eq!(err, StoreError::DuplicateId("trk-240813-001".to_owned()));
    assert_eq!(store.len(), 3);
    assert_eq!(
        crate::lookup::find(&store, "trk-240813-001").map(|t| t.customer.as_str()),
        Some("Ahmet Yılmaz")
    );
}
