//! In-place heap sort over a binary max-heap.
//!
//! Variables:
//!   n : usize  — current heap size, A[0, n) is the heap
//!
//! Equations:
//!   left(i) = 2i + 1,  right(i) = 2i + 2
//!   heapify: sift_down(i) for i = N/2 - 1 down to 0         O(N)
//!   for n = N-1 down to 1: swap(A[0], A[n]), sift_down(0)   O(N log N)

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for n in (1..len).rev() {
        arr.swap(0, n);
        sift_down(arr, n, 0);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            break;
        }
        arr.swap(i, largest);
        i = largest;
    }
}
