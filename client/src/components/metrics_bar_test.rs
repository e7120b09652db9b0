use super::*;

#[test]
fn tiles_render_counts_in_order() {
    let m = DeskMetrics { total: 5, open: 4, awaiting_parts: 2, ready: 1, due_today: 3 };
    let tiles = metric_tiles(&m);
    let values: Vec<&str> = tiles.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["4", "3", "2", "1"]);
    assert_eq!(tiles[0].label, "Açık İş Emri");
}
