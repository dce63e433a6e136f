/// Three-branch binary search over an ascending slice.
///
/// Returns the first hit reached by the descent `mi = (l + r) / 2`; with
/// duplicates this is neither guaranteed leftmost nor rightmost.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        if target < &arr[m] {
            r = m;
        } else if &arr[m] < target {
            l = m + 1;
        } else {
            return Some(m);
        }
    }
    None
}
