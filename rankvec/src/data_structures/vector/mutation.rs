use super::Vector;
use crate::error::{Result, VectorError};

impl<T> Vector<T> {
    pub fn get(&self, rank: usize) -> Result<&T> {
        self.check_rank(rank)?;
        Ok(&self.elems[rank])
    }

    pub fn get_mut(&mut self, rank: usize) -> Result<&mut T> {
        self.check_rank(rank)?;
        Ok(&mut self.elems[rank])
    }

    /// Overwrite rank `rank`, returning the previous element.
    pub fn set(&mut self, rank: usize, value: T) -> Result<T> {
        self.check_rank(rank)?;
        Ok(std::mem::replace(&mut self.elems[rank], value))
    }

    pub fn front(&self) -> Result<&T> {
        self.elems.first().ok_or(VectorError::EmptyContainer)
    }

    pub fn back(&self) -> Result<&T> {
        self.elems.last().ok_or(VectorError::EmptyContainer)
    }

    /// Insert `value` at `rank` (0 <= rank <= size), shifting the tail right.
    /// Returns the rank.
    pub fn insert(&mut self, rank: usize, value: T) -> Result<usize> {
        if rank > self.elems.len() {
            return Err(VectorError::OutOfRange { rank, bound: self.elems.len() });
        }
        self.expand();
        self.elems.insert(rank, value);
        Ok(rank)
    }

    /// Append at the end; returns the new element's rank.
    pub fn push(&mut self, value: T) -> usize {
        let rank = self.elems.len();
        self.expand();
        self.elems.push(value);
        rank
    }

    pub fn remove(&mut self, rank: usize) -> Result<T> {
        self.check_rank(rank)?;
        Ok(self.remove_at(rank))
    }

    /// Remove ranks `[lo, hi)` and return how many were removed.
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> Result<usize> {
        self.check_range(lo, hi)?;
        Ok(self.remove_span(lo, hi))
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.elems.is_empty() {
            return Err(VectorError::EmptyContainer);
        }
        Ok(self.remove_at(self.elems.len() - 1))
    }

    pub(super) fn remove_at(&mut self, rank: usize) -> T {
        let x = self.elems.remove(rank);
        self.shrink();
        x
    }

    pub(super) fn remove_span(&mut self, lo: usize, hi: usize) -> usize {
        if lo == hi {
            return 0;
        }
        self.elems.drain(lo..hi);
        self.shrink();
        hi - lo
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_CAPACITY;
    use crate::error::VectorError;
    use crate::Vector;

    #[test]
    fn insert_shifts_tail() {
        let mut v = Vector::from_slice(&[1, 2, 4]);
        assert_eq!(v.insert(2, 3), Ok(2));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.insert(4, 5), Ok(4));
        assert_eq!(v.insert(0, 0), Ok(0));
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_past_size_is_rejected_without_change() {
        let mut v = Vector::from_slice(&[1]);
        let err = v.insert(2, 9).expect_err("rank 2 > size 1");
        assert_eq!(err, VectorError::OutOfRange { rank: 2, bound: 1 });
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn set_returns_previous() {
        let mut v = Vector::from_slice(&["a", "b"]);
        assert_eq!(v.set(1, "z"), Ok("b"));
        assert_eq!(v.as_slice(), &["a", "z"]);
        assert!(v.set(2, "q").is_err());
    }

    #[test]
    fn empty_range_removes_nothing() {
        let mut v = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(v.remove_range(1, 1), Ok(0));
        assert_eq!(v.remove_range(3, 3), Ok(0));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn range_errors_are_ordered() {
        let mut v = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(v.remove_range(2, 1), Err(VectorError::InvalidRange { lo: 2, hi: 1 }));
        assert_eq!(v.remove_range(1, 4), Err(VectorError::OutOfRange { rank: 4, bound: 3 }));
    }

    #[test]
    fn pop_front_back_on_empty() {
        let mut v: Vector<u8> = Vector::new();
        assert_eq!(v.pop(), Err(VectorError::EmptyContainer));
        assert_eq!(v.front(), Err(VectorError::EmptyContainer));
        assert_eq!(v.back(), Err(VectorError::EmptyContainer));
        v.push(4);
        v.push(5);
        assert_eq!(v.front(), Ok(&4));
        assert_eq!(v.back(), Ok(&5));
        assert_eq!(v.pop(), Ok(5));
    }

    #[test]
    fn push_grows_by_doubling() {
        let mut v = Vector::new();
        for i in 0..=DEFAULT_CAPACITY {
            assert_eq!(v.push(i), i);
        }
        assert_eq!(v.capacity(), 2 * DEFAULT_CAPACITY);
    }
}
