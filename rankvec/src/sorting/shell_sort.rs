//! Shell sort with the halving gap sequence N/2, N/4, ..., 1.
//!
//! Each round is a gap-strided insertion sort done with swaps.

pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_odd_length() {
        let mut v = vec![9, 8, 7, 3, 1, 2, 6, 5, 4];
        shell_sort(&mut v);
        assert_eq!(v, (1..=9).collect::<Vec<_>>());
    }
}
