//! Randomized quick sort.
//!
//! Equations:
//!   p = uniform(0, N),  swap(A[0], A[p])
//!   partition: pivot rides the "hole"; scan right-to-left while pivot <= A[hi],
//!   swap; scan left-to-right while A[lo] <= pivot, swap; until lo == hi
//!   afterwards A[0, lo) <= pivot = A[lo] <= A(lo, N)
//!
//! Recursion goes into the smaller side and the larger side is looped, so the
//! stack stays O(log N) even when every element equals the pivot.

use rand::Rng;

pub fn quick_sort<T: Ord, R: Rng>(arr: &mut [T], rng: &mut R) {
    let mut arr = arr;
    while arr.len() >= 2 {
        let pivot = partition(arr, rng);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, rng);
            arr = right;
        } else {
            quick_sort(right, rng);
            arr = left;
        }
    }
}

fn partition<T: Ord, R: Rng>(arr: &mut [T], rng: &mut R) -> usize {
    let len = arr.len();
    arr.swap(0, rng.random_range(0..len));
    let (mut lo, mut hi) = (0, len - 1);
    while lo < hi {
        // pivot at lo
        while lo < hi && arr[lo] <= arr[hi] {
            hi -= 1;
        }
        arr.swap(lo, hi);
        // pivot at hi
        while lo < hi && arr[lo] <= arr[hi] {
            lo += 1;
        }
        arr.swap(lo, hi);
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn partition_places_pivot() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut v = vec![6, 2, 9, 4, 4, 7, 1];
        let p = partition(&mut v, &mut rng);
        assert!(v[..p].iter().all(|x| *x <= v[p]));
        assert!(v[p + 1..].iter().all(|x| *x >= v[p]));
    }

    #[test]
    fn all_equal_large_input_does_not_blow_the_stack() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut v = vec![7u8; 5_000];
        quick_sort(&mut v, &mut rng);
        assert!(v.iter().all(|x| *x == 7));
    }
}
