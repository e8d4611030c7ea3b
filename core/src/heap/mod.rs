//! Balance min-heap
//!
//! Array-backed binary min-heap keyed on signed balance. The settlement
//! engine uses it to repeatedly pull the most negative balance (the biggest
//! debtor) from the set of unsettled users.
//!
//! Entries hold an index into the ledger's user storage plus a working copy
//! of the balance; the heap never outlives a single settlement run and the
//! engine commits working balances back to the ledger when the run ends.
//!
//! # Critical Invariants
//!
//! 1. **Heap property**: for every non-root entry,
//!    `balance(parent) <= balance(child)`
//! 2. **Completeness**: the backing array has no gaps
//! 3. Ties between equal balances are broken arbitrarily; callers must not
//!    assume a stable order among equal keys

use thiserror::Error;

/// Errors that can occur during heap operations
///
/// An empty extraction indicates a logic fault in the caller (the settlement
/// loop guards on size), not a recoverable user-facing condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract attempted on an empty heap")]
    Empty,
}

/// A heap entry: an index reference into ledger storage plus a working
/// balance copy (i64 cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    /// Position of the user in the ledger's storage
    pub user_index: usize,

    /// Working balance for this settlement run (cents)
    pub balance: i64,
}

impl HeapEntry {
    /// Create an entry for the user at `user_index` with the given balance
    pub fn new(user_index: usize, balance: i64) -> Self {
        Self {
            user_index,
            balance,
        }
    }
}

/// Binary min-heap over [`HeapEntry`], keyed on balance.
///
/// # Example
/// ```
/// use split_settle_core::heap::{BalanceHeap, HeapEntry};
///
/// let mut heap = BalanceHeap::new();
/// heap.insert(HeapEntry::new(0, -500));
/// heap.insert(HeapEntry::new(1, 200));
/// heap.insert(HeapEntry::new(2, -900));
///
/// assert_eq!(heap.extract_min().unwrap().balance, -900);
/// assert_eq!(heap.extract_min().unwrap().balance, -500);
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalanceHeap {
    entries: Vec<HeapEntry>,
}

impl BalanceHeap {
    /// Create an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reference to the minimum entry without removing it
    pub fn peek(&self) -> Option<&HeapEntry> {
        self.entries.first()
    }

    /// Insert an entry, restoring the heap property by sifting up. O(log n).
    pub fn insert(&mut self, entry: HeapEntry) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the minimum balance. O(log n).
    ///
    /// # Errors
    ///
    /// `HeapError::Empty` if the heap holds no entries.
    pub fn extract_min(&mut self) -> Result<HeapEntry, HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }
        if self.entries.len() == 1 {
            return self.entries.pop().ok_or(HeapError::Empty);
        }

        // Move the last entry into the root slot, then sift it down
        let root = self.entries.swap_remove(0);
        self.sift_down(0);
        Ok(root)
    }

    /// Check the heap property by full-tree traversal (diagnostic)
    ///
    /// Returns true when every non-root entry is >= its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.entries.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.entries[parent].balance <= self.entries[child].balance
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].balance <= self.entries[index].balance {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].balance < self.entries[smallest].balance {
                smallest = left;
            }
            if right < len && self.entries[right].balance < self.entries[smallest].balance {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}
