/// In-place slice partition used by `Quadtree::subdivide` to split a node's
/// entry range into quadrants without allocating.
pub trait Partition<T> {
    /// Reorder the slice so every element satisfying `pred` precedes every
    /// element that does not, returning the length of the satisfying prefix.
    /// Relative order within each half is not preserved.
    fn partition(&mut self, pred: impl Fn(&T) -> bool) -> usize;
}

impl<T> Partition<T> for [T] {
    fn partition(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let mut lo = 0;
        let mut hi = self.len();
        while lo < hi {
            if pred(&self[lo]) {
                lo += 1;
            } else {
                hi -= 1;
                self.swap(lo, hi);
            }
        }
        lo
    }
}
