use std::cmp::Ordering;

/// Open-list entry, ordered so that `BinaryHeap` pops the lowest `f` first.
/// Among equal `f`, the deeper entry (higher `g`) wins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<S> {
    pub f: u64,
    pub g: u64,
    pub state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| self.g.cmp(&other.g))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
