use tabula::text::{char_width, display_width, fit_to_width, truncate_to_width, Align};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters occupy two cells
    assert_eq!(display_width("日本語"), 6);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("", 5), "");
}

#[test]
fn test_truncate_cjk() {
    // "日本語" is 6 cells; 4 content cells plus the ellipsis fit in 5
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_fit_pads_left() {
    assert_eq!(fit_to_width("ab", 5, Align::Left), "ab   ");
}

#[test]
fn test_fit_pads_right() {
    assert_eq!(fit_to_width("42", 5, Align::Right), "   42");
}

#[test]
fn test_fit_centers() {
    assert_eq!(fit_to_width("ab", 6, Align::Center), "  ab  ");
    assert_eq!(fit_to_width("ab", 5, Align::Center), " ab  ");
}

#[test]
fn test_fit_truncates() {
    assert_eq!(fit_to_width("hello world", 8, Align::Left), "hello w…");
}
