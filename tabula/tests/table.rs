use tabula::table::{filter_rows, sort_order, Row, SortDir, TableView, Value};

fn people() -> Vec<Row> {
    vec![
        Row::new().set("name", "Jane Smith").set("dept", "Finance"),
        Row::new().set("name", "Bob Jones").set("dept", "Legal"),
        Row::new().set("name", "Ann Smithers").set("dept", "HR"),
    ]
}

fn numbered(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new().set("id", i as i64).set("name", format!("Item {}", i)))
        .collect()
}

fn names(rows: &[&Row]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("name").and_then(Value::text).unwrap_or_default())
        .collect()
}

#[test]
fn test_empty_search_is_identity() {
    let rows = people();
    assert_eq!(filter_rows(&rows, "", None), vec![0, 1, 2]);
    assert_eq!(filter_rows(&rows, "   ", None), vec![0, 1, 2]);
}

#[test]
fn test_filter_is_a_subsequence() {
    let rows = numbered(50);
    let kept = filter_rows(&rows, "1", None);
    // In order, no duplicates, all within range
    for pair in kept.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!(kept.iter().all(|&i| i < rows.len()));
}

#[test]
fn test_filter_substring_match() {
    let rows = people();
    assert_eq!(filter_rows(&rows, "smith", None), vec![0, 2]);
    assert_eq!(filter_rows(&rows, "SMITH", None), vec![0, 2]);
    assert_eq!(filter_rows(&rows, "jones", None), vec![1]);
    assert_eq!(filter_rows(&rows, "zzz", None), Vec::<usize>::new());
}

#[test]
fn test_filter_respects_field_restriction() {
    let rows = people();
    let fields = vec!["dept".to_string()];
    // "smith" only appears in the name field
    assert_eq!(filter_rows(&rows, "smith", Some(&fields)), Vec::<usize>::new());
    assert_eq!(filter_rows(&rows, "legal", Some(&fields)), vec![1]);
}

#[test]
fn test_null_values_never_match() {
    let rows = vec![
        Row::new().set("name", "null").set("note", Value::Null),
        Row::new().set("name", "real").set("note", "null check"),
    ];
    // Row 0's note is Null; only its name field ("null") matches
    assert_eq!(filter_rows(&rows, "null", None), vec![0, 1]);
    assert_eq!(
        filter_rows(&rows, "null", Some(&["note".to_string()])),
        vec![1]
    );
}

#[test]
fn test_unsorted_preserves_insertion_order() {
    let view = TableView::with_rows(10, people());
    let snap = view.snapshot();
    assert_eq!(names(&snap.rows), ["Jane Smith", "Bob Jones", "Ann Smithers"]);
}

#[test]
fn test_descending_reverses_ascending() {
    let rows = numbered(17);
    let mut asc: Vec<usize> = (0..rows.len()).collect();
    sort_order(&rows, &mut asc, "name", SortDir::Ascending);
    let mut desc: Vec<usize> = (0..rows.len()).collect();
    sort_order(&rows, &mut desc, "name", SortDir::Descending);

    let reversed: Vec<usize> = asc.iter().rev().copied().collect();
    assert_eq!(desc, reversed);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let rows = vec![
        Row::new().set("name", "a").set("grp", "x"),
        Row::new().set("name", "b").set("grp", "x"),
        Row::new().set("name", "c").set("grp", "x"),
    ];
    let mut order: Vec<usize> = vec![0, 1, 2];
    sort_order(&rows, &mut order, "grp", SortDir::Ascending);
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_numeric_aware_ordering() {
    let rows = vec![
        Row::new().set("views", "100"),
        Row::new().set("views", "20"),
        Row::new().set("views", "3"),
    ];
    let mut order: Vec<usize> = vec![0, 1, 2];
    sort_order(&rows, &mut order, "views", SortDir::Ascending);
    // [3, 20, 100], not lexicographic [100, 20, 3]
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_null_sorts_as_empty_string() {
    let rows = vec![
        Row::new().set("name", "beta").set("v", "1"),
        Row::new().set("name", "empty").set("v", Value::Null),
        Row::new().set("name", "alpha").set("v", "0"),
    ];
    let mut order: Vec<usize> = vec![0, 1, 2];
    sort_order(&rows, &mut order, "v", SortDir::Ascending);
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_pagination_partitions_the_collection() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.toggle_sort("name");

    let mut seen: Vec<String> = Vec::new();
    let total_pages = view.total_pages();
    for page in 1..=total_pages {
        view.set_page(page);
        seen.extend(names(&view.snapshot().rows));
    }

    let rows = numbered(23);
    let mut order: Vec<usize> = (0..23).collect();
    sort_order(&rows, &mut order, "name", SortDir::Ascending);
    let expected: Vec<String> = order.iter().map(|&i| format!("Item {}", i)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_empty_collection_is_one_empty_page() {
    let view = TableView::new(10);
    let snap = view.snapshot();
    assert_eq!(snap.total_pages, 1);
    assert_eq!(snap.page, 1);
    assert!(snap.rows.is_empty());
    assert_eq!(snap.start, 0);
}

#[test]
fn test_page_requests_clamp() {
    let mut view = TableView::with_rows(5, numbered(23));
    assert_eq!(view.total_pages(), 5);

    view.set_page(0);
    let low = names(&view.snapshot().rows);
    view.set_page(1);
    assert_eq!(names(&view.snapshot().rows), low);

    view.set_page(10);
    let high = names(&view.snapshot().rows);
    view.set_page(5);
    assert_eq!(names(&view.snapshot().rows), high);
    assert_eq!(view.snapshot().rows.len(), 3);
}

#[test]
fn test_search_resets_page() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_page(4);
    assert_eq!(view.page(), 4);
    view.set_search("item");
    assert_eq!(view.page(), 1);
}

#[test]
fn test_sort_toggle_resets_page_and_toggles_direction() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_page(3);

    view.toggle_sort("name");
    assert_eq!(view.sort_key(), Some("name"));
    assert_eq!(view.sort_dir(), SortDir::Ascending);
    assert_eq!(view.page(), 1);

    view.toggle_sort("name");
    assert_eq!(view.sort_dir(), SortDir::Descending);

    view.toggle_sort("id");
    assert_eq!(view.sort_key(), Some("id"));
    assert_eq!(view.sort_dir(), SortDir::Ascending);
}

#[test]
fn test_double_toggle_restores_ascending_order_exactly() {
    let mut view = TableView::with_rows(50, numbered(23));
    view.toggle_sort("name");
    let first = names(&view.snapshot().rows);

    view.toggle_sort("name");
    view.toggle_sort("name");
    let third = names(&view.snapshot().rows);

    assert_eq!(first, third);
}

#[test]
fn test_set_rows_resets_page() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_page(5);
    assert_eq!(view.page(), 5);

    view.set_rows(numbered(7));
    assert_eq!(view.page(), 1);
    assert_eq!(view.total_pages(), 2);
}

#[test]
fn test_filter_then_page_clamp_interaction() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_page(5);
    // Filter shrinks the collection below the current page
    view.set_search("Item 2");
    // "Item 2", "Item 20", "Item 21", "Item 22"
    let snap = view.snapshot();
    assert_eq!(snap.total_rows, 4);
    assert_eq!(snap.page, 1);
    assert_eq!(snap.total_pages, 1);
}

#[test]
fn test_snapshot_indices_map_back_to_source_rows() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_search("Item 1");
    view.toggle_sort("name");
    view.toggle_sort("name");

    let snap = view.snapshot();
    assert_eq!(snap.indices.len(), snap.rows.len());
    for (pos, &idx) in snap.indices.iter().enumerate() {
        assert_eq!(snap.rows[pos], &view.rows()[idx]);
    }
}

#[test]
fn test_snapshot_ordinals() {
    let mut view = TableView::with_rows(5, numbered(23));
    view.set_page(5);
    let snap = view.snapshot();
    assert_eq!(snap.start, 21);
    assert_eq!(snap.end, 23);
    assert_eq!(snap.total_rows, 23);
}
