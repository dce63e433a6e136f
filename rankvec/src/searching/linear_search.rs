//! Backward linear scan.
//!
//! Equations:
//!   find_last(A, e) = max { i | A[i] == e },  None if no such i    O(N)
//!
//! Scanning from the high end means the first hit is the rightmost match.

pub fn find_last<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    let mut i = arr.len();
    while i > 0 {
        i -= 1;
        if &arr[i] == target {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_rightmost_match() {
        assert_eq!(find_last(&[7, 2, 9, 2, 4], &2), Some(3));
    }

    #[test]
    fn misses_on_absent_and_empty() {
        assert_eq!(find_last(&[1, 2, 3], &5), None);
        assert_eq!(find_last::<i32>(&[], &5), None);
    }
}
