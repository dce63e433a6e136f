//! Adaptive bubble sort.
//!
//! Each pass bubbles the maximum of A[0, hi) into A[hi - 1]; the unsorted
//! suffix shrinks by one per pass and the sort stops after a pass with no swap.

pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut hi = arr.len();
    while hi > 1 && !bubble(&mut arr[..hi]) {
        hi -= 1;
    }
}

/// One sweep of adjacent swaps. Returns true when no pair was inverted.
fn bubble<T: Ord>(arr: &mut [T]) -> bool {
    let mut sorted = true;
    for i in 1..arr.len() {
        if arr[i - 1] > arr[i] {
            sorted = false;
            arr.swap(i - 1, i);
        }
    }
    sorted
}
