/// A candidate neighbor for one query: its distance to the query and its index
/// into the training set. Transient, never kept beyond a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    pub index: usize,
}

impl Neighbor {
    pub fn new(distance: f64, index: usize) -> Self {
        Self { distance, index }
    }
}

/// Array-backed max-heap of fixed capacity `k`, keyed by neighbor distance.
///
/// The root always holds the largest distance currently retained, so after a
/// single pass over `n` candidates the heap contains the `k` smallest-distance
/// entries seen, in O(n log k) time and O(k) space. Heap order is not a sorted
/// ranking; callers must not rely on the order of the retained entries.
#[derive(Debug)]
pub struct BoundedMaxHeap {
    entries: Vec<Neighbor>,
    capacity: usize,
}

impl BoundedMaxHeap {
    /// Creates an empty heap that retains at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "heap capacity must be positive");
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the largest retained distance, if any.
    pub fn peek_max(&self) -> Option<Neighbor> {
        self.entries.first().copied()
    }

    /// Offers a candidate to the heap. Below capacity it is always inserted.
    /// At capacity it evicts the current maximum only when **strictly**
    /// closer; a candidate whose distance equals the maximum is discarded, so
    /// the first-seen entry wins exact ties at the boundary.
    ///
    /// Returns whether the candidate was retained.
    pub fn offer(&mut self, candidate: Neighbor) -> bool {
        if self.entries.len() < self.capacity {
            self.entries.push(candidate);
            self.sift_up(self.entries.len() - 1);
            true
        } else if candidate.distance < self.entries[0].distance {
            self.entries[0] = candidate;
            self.sift_down(0);
            true
        } else {
            false
        }
    }

    /// Consumes the heap, yielding the retained entries in unspecified order.
    pub fn into_entries(self) -> Vec<Neighbor> {
        self.entries
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.entries[child].distance > self.entries[parent].distance {
                self.entries.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            let mut largest = parent;
            if left < len && self.entries[left].distance > self.entries[largest].distance {
                largest = left;
            }
            if right < len && self.entries[right].distance > self.entries[largest].distance {
                largest = right;
            }
            if largest == parent {
                break;
            }
            self.entries.swap(parent, largest);
            parent = largest;
        }
    }
}
