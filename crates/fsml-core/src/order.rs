use std::cmp::Ordering;

use crate::parser::segment_order;

/// Compare two relative paths in FSML order.
///
/// Walks both paths segment by segment. At the first differing segment:
/// 1. Both numbered: ascending by number, equal numbers by text (`01-a` < `1-a`)
/// 2. One numbered: the numbered one first
/// 3. Neither numbered: case-sensitive string order
///
/// When one path is a prefix of the other, the shorter (ancestor) path
/// comes first.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.trim_end_matches('/').split('/').collect();
    let b_parts: Vec<&str> = b.trim_end_matches('/').split('/').collect();

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        if a_part == b_part {
            continue;
        }
        return compare_segments(a_part, b_part);
    }

    a_parts.len().cmp(&b_parts.len())
}

/// Sibling order for a single pair of segments that differ
pub(crate) fn compare_segments(a: &str, b: &str) -> Ordering {
    compare_ordered(segment_order(a), segment_order(b))
        .filter(|o| o.is_ne())
        .unwrap_or_else(|| a.cmp(b))
}

/// Numbered-first comparison of two optional orders.
///
/// Returns None when neither side is numbered, leaving the tie-break to the
/// caller.
pub(crate) fn compare_ordered(a: Option<u32>, b: Option<u32>) -> Option<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        (Some(_), None) => Some(Ordering::Less),
        (None, Some(_)) => Some(Ordering::Greater),
        (None, None) => None,
    }
}

/// Sort paths according to FSML rules.
///
/// The sort is stable: paths comparing equal keep their input order.
///
/// # Examples
///
/// ```
/// use fsml_core::sort_paths;
///
/// let sorted = sort_paths(&["appendix.md", "02-methods/01-setup.md", "01-intro.md"]);
/// assert_eq!(sorted, vec!["01-intro.md", "02-methods/01-setup.md", "appendix.md"]);
/// ```
pub fn sort_paths<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let mut sorted: Vec<&str> = paths.iter().map(|p| p.as_ref()).collect();
    sorted.sort_by(|a, b| compare_paths(a, b));
    sorted.into_iter().map(str::to_string).collect()
}
