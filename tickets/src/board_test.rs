use super::*;

fn column_ids(columns: &[BoardColumn], key: &str) -> Vec<String> {
    columns
        .iter()
        .find(|c| c.status.key == key)
        .map(|c| c.tickets.iter().map(|t| t.id.clone()).collect())
        .unwrap_or_default()
}

fn expected_ids(store: &TicketStore, key: &str) -> Vec<String> {
    store.list().iter().filter(|t| t.status == key).map(|t| t.id.clone()).collect()
}

#[test]
fn columns_follow_registry_order() {
    let cols = columns(&TicketStore::with_sample_data());
    let keys: Vec<&str> = cols.iter().map(|c| c.status.key).collect();
    assert_eq!(keys, vec!["geldi", "parca", "tamir", "test", "hazir", "teslim"]);
}

#[test]
fn sample_columns_have_expected_counts() {
    let cols = columns(&TicketStore::with_sample_data());
    let counts: Vec<usize> = cols.iter().map(BoardColumn::count).collect();
    assert_eq!(counts, vec![0, 1, 1, 1, 0, 0]);
}

#[test]
fn columns_match_store_after_moves() {
    let mut store = TicketStore::with_sample_data();
    store.move_status("TRK-240813-002", "tamir");
    store.move_status("TRK-240812-008", "hazir");
    store.move_status("TRK-240812-008", "tamir");
    store.move_status("TRK-999999-999", "geldi");

    let cols = columns(&store);
    for status in &STATUSES {
        assert_eq!(column_ids(&cols, status.key), expected_ids(&store, status.key));
    }
    assert_eq!(
        column_ids(&cols, "tamir"),
        vec!["TRK-240813-001", "TRK-240813-002", "TRK-240812-008"]
    );
}

#[test]
fn unknown_status_appears_in_no_column() {
    let mut store = TicketStore::with_sample_data();
    store.move_status("TRK-240813-001", "arsiv");

    let total: usize = columns(&store).iter().map(BoardColumn::count).sum();
    assert_eq!(total, 2);
}

#[test]
fn move_targets_list_every_stage() {
    assert_eq!(move_targets().len(), STATUSES.len());
}
