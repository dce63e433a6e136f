//! Top-down merge sort with a left-half scratch buffer.
//!
//! Variables:
//!   B : Vec<T>  — copy of the left half A[0, mi)
//!   C : A[mi, N) — right half, read in place
//!
//! Equations:
//!   mi = N / 2
//!   sort(A[0, mi)), sort(A[mi, N)), merge
//!   merge writes A[i], i = j + k, taking C[k] only when C[k] < B[j]
//!   (ties go to B, so the sort is stable)              O(N log N), O(N/2) extra
//!
//! Writes never overtake unread C: a C element is taken into A[i] with
//! i < mi + k, and once B is exhausted the rest of C is already in place.

pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mi = arr.len() / 2;
    merge_sort(&mut arr[..mi]);
    merge_sort(&mut arr[mi..]);
    merge(arr, mi);
}

fn merge<T: Ord + Clone>(arr: &mut [T], mi: usize) {
    let mut left = arr[..mi].to_vec().into_iter().peekable();
    let mut i = 0;
    let mut k = mi;
    while let Some(b) = left.peek() {
        if k < arr.len() && arr[k] < *b {
            arr.swap(i, k);
            k += 1;
        } else if let Some(b) = left.next() {
            arr[i] = b;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sort_basic() {
        let mut v = vec![5, 2, 4, 6, 1, 3];
        merge_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_keeps_right_tail_in_place() {
        let mut v = vec![1, 2, 3, 4, 5];
        merge(&mut v, 2);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn merge_interleaves_halves() {
        let mut v = vec!["b", "d", "f", "a", "c", "e", "g"];
        merge(&mut v, 3);
        assert_eq!(v, vec!["a", "b", "c", "d", "e", "f", "g"]);
    }
}
