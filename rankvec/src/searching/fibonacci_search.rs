//! Fibonacci search over an ascending slice.
//!
//! Variables:
//!   F : Vec<usize>  — 1, 1, 2, 3, 5, ... up to the first term >= N
//!   k : usize       — current term index
//!
//! Equations:
//!   while r - l < F[k]: k -= 1
//!   mi = l + F[k] - 1
//!   e < A[mi]  => r = mi
//!   A[mi] < e  => l = mi + 1
//!   else hit at mi                                   O(log N)
//!
//! Probes split the range at a Fibonacci point instead of the midpoint, so on
//! ranges with duplicates the hit may differ from `binary_search`; on distinct
//! keys both return the same rank.

pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let mut fib = vec![1usize, 1];
    while fib[fib.len() - 1] < n {
        let next = fib[fib.len() - 1] + fib[fib.len() - 2];
        fib.push(next);
    }
    let mut k = fib.len() - 1;
    let (mut l, mut r) = (0, n);
    while l < r {
        while r - l < fib[k] {
            k -= 1;
        }
        let mi = l + fib[k] - 1;
        if target < &arr[mi] {
            r = mi;
        } else if &arr[mi] < target {
            l = mi + 1;
        } else {
            return Some(mi);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::binary_search::binary_search;

    #[test]
    fn agrees_with_binary_search_on_distinct_keys() {
        let arr: Vec<i32> = (0..40).map(|x| x * 3).collect();
        for probe in -2..125 {
            assert_eq!(
                fibonacci_search(&arr, &probe),
                binary_search(&arr, &probe),
                "probe {probe}"
            );
        }
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(fibonacci_search(&[4], &4), Some(0));
        assert_eq!(fibonacci_search(&[4], &5), None);
        assert_eq!(fibonacci_search::<i32>(&[], &5), None);
    }

    #[test]
    fn duplicate_hit_is_an_occurrence() {
        let arr = [1, 2, 2, 2, 3, 3, 8];
        let hit = fibonacci_search(&arr, &3).expect("3 is present");
        assert_eq!(arr[hit], 3);
    }
}
