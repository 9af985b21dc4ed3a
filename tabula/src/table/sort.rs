//! Stable, numeric-aware row ordering.

use std::cmp::Ordering;

use super::row::{Row, Value};

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Ascending,
    Descending,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }
}

/// Reorder `order` (indices into `rows`) by the stringified values of
/// `key`. The sort is stable, so rows comparing equal keep their
/// relative input order. `Null` and missing values sort as the empty
/// string.
pub fn sort_order(rows: &[Row], order: &mut [usize], key: &str, dir: SortDir) {
    let sort_keys: Vec<String> = rows
        .iter()
        .map(|row| row.get(key).and_then(Value::text).unwrap_or_default())
        .collect();

    order.sort_by(|&a, &b| {
        let cmp = natural_cmp(&sort_keys[a], &sort_keys[b]);
        match dir {
            SortDir::Ascending => cmp,
            SortDir::Descending => cmp.reverse(),
        }
    });
}

/// Case-folded, numeric-aware string comparison: runs of ASCII digits
/// compare as integers, so "2" orders before "10"; everything else
/// compares case-insensitively by code point.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let na = take_digits(&mut ia);
                    let nb = take_digits(&mut ib);
                    let cmp = cmp_digit_runs(&na, &nb);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                } else {
                    // Digits order before other characters
                    match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
                        (true, false) => return Ordering::Less,
                        (false, true) => return Ordering::Greater,
                        _ => {}
                    }
                    let fa = ca.to_lowercase();
                    let fb = cb.to_lowercase();
                    let cmp = fa.cmp(fb);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                    ia.next();
                    ib.next();
                }
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        it.next();
    }
    digits
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');
    // More significant digits wins; equal length compares lexically
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        // Same numeric value: fewer leading zeros first, for determinism
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("100", "20"), Ordering::Greater);
        assert_eq!(natural_cmp("v1.9", "v1.10"), Ordering::Less);
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(natural_cmp("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(natural_cmp("alice", "Bob"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_keep_numeric_value() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "8"), Ordering::Less);
    }

    #[test]
    fn digits_order_before_letters() {
        assert_eq!(natural_cmp("1a", "a1"), Ordering::Less);
    }

    #[test]
    fn prefixes_order_first() {
        assert_eq!(natural_cmp("ws", "ws-01"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }
}
