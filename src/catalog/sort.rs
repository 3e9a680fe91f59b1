//! In-place sorting algorithms over slices, parametrized by a comparator.
//!
//! A comparator returning `Ordering::Less` means its first argument belongs before the
//! second, so descending orders are expressed through the comparator and not through a
//! separate algorithm.

use std::cmp::Ordering;
use std::ops::Range;

/// Which run supplies the next element when the heads of both runs compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    Left,
    Right,
}

pub fn selection_sort_by<T, F>(items: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    selection_sort_range_by(items, 0..len, cmp);
}

/// Selection sort restricted to `range` (end excluded). Elements outside the range are not
/// touched. Panics if the range is out of bounds.
pub fn selection_sort_range_by<T, F>(items: &mut [T], range: Range<usize>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in range.clone() {
        let mut pos = i;
        for k in (i + 1)..range.end {
            if cmp(&items[k], &items[pos]) == Ordering::Less {
                pos = k;
            }
        }
        items.swap(i, pos);
    }
}

/// Stable insertion sort: each element walks left past every predecessor that compares
/// greater than it.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Non-recursive merge sort: both halves (split at `len / 2`) are selection sorted, then
/// merged through a full-length buffer. Ties take the right half.
pub fn two_phase_merge_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;

    selection_sort_range_by(items, 0..mid, &mut cmp);
    selection_sort_range_by(items, mid..len, &mut cmp);

    let merged = merge_runs(&items[..mid], &items[mid..], TieBreak::Right, &mut cmp);
    items.clone_from_slice(&merged);
}

/// Top-down recursive merge sort over the whole slice. Ties take the left run.
pub fn merge_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let high = items.len() - 1;
    merge_sort_inclusive(items, 0, high, &mut cmp);
}

/// Recursive merge sort over the inclusive index range `[low, high]`. Panics if `high` is
/// out of bounds.
pub fn merge_sort_range_by<T, F>(items: &mut [T], low: usize, high: usize, mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_inclusive(items, low, high, &mut cmp);
}

fn merge_sort_inclusive<T, F>(items: &mut [T], low: usize, high: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }
    let mid = (low + high) / 2;
    merge_sort_inclusive(items, low, mid, cmp);
    merge_sort_inclusive(items, mid + 1, high, cmp);

    let merged = merge_runs(
        &items[low..=mid],
        &items[mid + 1..=high],
        TieBreak::Left,
        cmp,
    );
    items[low..=high].clone_from_slice(&merged);
}

/// Merges two sorted runs into a new buffer.
pub fn merge_runs<T, F>(left: &[T], right: &[T], tie: TieBreak, cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        let take_left = match cmp(&left[l], &right[r]) {
            Ordering::Less => true,
            Ordering::Equal => tie == TieBreak::Left,
            Ordering::Greater => false,
        };
        if take_left {
            merged.push(left[l].clone());
            l += 1;
        } else {
            merged.push(right[r].clone());
            r += 1;
        }
    }

    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}
