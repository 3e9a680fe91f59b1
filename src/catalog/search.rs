use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Range;

/// How a name query is compared against record names during binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Byte-for-byte comparison. The name sort ignores case, so mixed-case catalogs can
    /// hide matches in this mode.
    #[default]
    Exact,
    /// Case-insensitive comparison, consistent with the name sort order.
    IgnoreCase,
}

impl NameMatch {
    /// Orders `candidate` relative to `query`.
    pub fn compare(self, candidate: &str, query: &str) -> Ordering {
        match self {
            NameMatch::Exact => candidate.cmp(query),
            NameMatch::IgnoreCase => candidate
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(query.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// Every element matching `predicate`, in slice order.
pub fn sequential_search<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Binary search for the full run of elements that `probe` reports as equal.
///
/// `probe` orders an element relative to the target. The slice must be sorted consistently
/// with it; otherwise the result is unspecified. Returns an empty range on a miss.
pub fn binary_search_run<T, F>(items: &[T], mut probe: F) -> Range<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Inclusive bounds shifted by one so that `high == 0` stands for "below index 0".
    let mut low = 1usize;
    let mut high = items.len();

    while low <= high {
        let mid = (low + high) / 2;
        match probe(&items[mid - 1]) {
            Ordering::Equal => return expand_run(items, mid - 1, &mut probe),
            Ordering::Greater => high = mid - 1,
            Ordering::Less => low = mid + 1,
        }
    }

    0..0
}

/// Widens a hit at `index` to the contiguous run of equal elements around it.
fn expand_run<T, F>(items: &[T], index: usize, probe: &mut F) -> Range<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut start = index;
    while start > 0 && probe(&items[start - 1]) == Ordering::Equal {
        start -= 1;
    }

    let mut end = index + 1;
    while end < items.len() && probe(&items[end]) == Ordering::Equal {
        end += 1;
    }

    start..end
}
