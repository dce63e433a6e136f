//! Duplicate elimination.
//!
//! Equations:
//!   deduplicate(): i = 1; while i < N:
//!                    find(A[i], 0, i) >= 0  => remove(i)
//!                    else                   => i += 1            O(N^2)
//!   uniquify():    i = 0; for j in 1..N:
//!                    A[i] != A[j]  => A[++i] = A[j]
//!                  truncate to [0, i]                          O(N)
//!
//! Both return the number of removed elements. `uniquify` assumes the
//! vector is ascending and does not sort it.

use super::Vector;

impl<T: PartialEq> Vector<T> {
    /// Remove later copies of every element, keeping first occurrences in order.
    pub fn deduplicate(&mut self) -> usize {
        let old = self.elems.len();
        let mut i = 1;
        while i < self.elems.len() {
            if self.find_unchecked(&self.elems[i], 0, i) >= 0 {
                self.remove_at(i);
            } else {
                i += 1;
            }
        }
        let removed = old - self.elems.len();
        tracing::debug!(removed, size = self.elems.len(), "deduplicate");
        removed
    }

    /// Collapse runs of equal elements in an ascending vector.
    pub fn uniquify(&mut self) -> usize {
        let n = self.elems.len();
        if n < 2 {
            return 0;
        }
        let mut i = 0;
        for j in 1..n {
            if self.elems[i] != self.elems[j] {
                i += 1;
                self.elems.swap(i, j);
            }
        }
        let removed = self.remove_span(i + 1, n);
        tracing::debug!(removed, size = self.elems.len(), "uniquify");
        removed
    }
}
