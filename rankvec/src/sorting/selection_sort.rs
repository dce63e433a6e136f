//! Selection sort: swap max(A[0, hi)) into A[hi - 1], hi -= 1.   O(N^2)

pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let mut hi = arr.len();
    while hi > 1 {
        let mx = max_rank(&arr[..hi]);
        arr.swap(mx, hi - 1);
        hi -= 1;
    }
}

// back-to-front scan with strict `>` so the last of equal maxima wins
fn max_rank<T: Ord>(arr: &[T]) -> usize {
    let mut mx = arr.len() - 1;
    let mut i = mx;
    while i > 0 {
        i -= 1;
        if arr[i] > arr[mx] {
            mx = i;
        }
    }
    mx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_last_of_equal_maxima() {
        assert_eq!(max_rank(&[3, 9, 1, 9, 2]), 3);
    }

    #[test]
    fn sorts_with_duplicates() {
        let mut v = vec![4, 1, 4, 2, 1];
        selection_sort(&mut v);
        assert_eq!(v, vec![1, 1, 2, 4, 4]);
    }
}
