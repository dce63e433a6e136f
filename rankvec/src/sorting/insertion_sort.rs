//! Stable shift-and-insert sort.
//!
//! Equations:
//!   for i in 1..N:
//!     j = min { j <= i | A[j..i] all > A[i] }
//!     A[j..=i] rotated right by one                  O(N^2), O(N) if sorted

pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[i] {
            j -= 1;
        }
        arr[j..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_is_stable() {
        let mut v = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        insertion_sort(&mut v);
        let tags: String = v.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");
    }

    // ordered by key only
    #[derive(Debug)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}
