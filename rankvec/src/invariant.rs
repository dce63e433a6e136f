/// Checkable property of a value, used by debug assertions and tests
pub trait Invariant<T: ?Sized> {
    fn check(&self, value: &T) -> bool;
}

/// Slice is in ascending order (no adjacent inversion)
pub struct Ascending;

impl<T: Ord> Invariant<[T]> for Ascending {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Slice is strictly ascending: ascending with no adjacent equals
pub struct StrictlyAscending;

impl<T: Ord> Invariant<[T]> for StrictlyAscending {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| w[0] < w[1])
    }
}

/// No two elements of the slice compare equal
pub struct Distinct;

impl<T: PartialEq> Invariant<[T]> for Distinct {
    fn check(&self, value: &[T]) -> bool {
        value
            .iter()
            .enumerate()
            .all(|(i, x)| !value[..i].contains(x))
    }
}
