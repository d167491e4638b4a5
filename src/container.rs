//! The multi-view container.
//!
//! [`Trifold`] owns one authoritative sequence of integers and keeps three
//! derived orderings of it in sync across every mutation: ascending sorted
//! order, the side-cross order (alternating ends of the sorted sequence),
//! and the prime-valued subsequence in insertion order.
//!
//! Views are stored, not computed on demand, so cursors can index into them
//! directly. Rebuilds are linear; the container targets small collections
//! where the correctness of the orderings matters more than update
//! throughput.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::cursor::AscendingCursor;
use crate::cursor::PrimeCursor;
use crate::cursor::SideCrossCursor;
use crate::cursor::ViewKind;
use crate::cursor::side_cross_of;
use crate::error::Error;
use crate::prime::PrimeCache;

/// Inline capacity for element and view buffers. Containers at or under
/// this size never touch the heap.
const INLINE_CAP: usize = 16;

pub(crate) type Buf = SmallVec<[i64; INLINE_CAP]>;

/// Backing store shared between a container and its cursors.
///
/// Cursors read exclusively through [`Store::view`]; the rest of the store
/// is not visible to them.
#[derive(Debug, Clone, Default)]
pub(crate) struct Store {
    /// Authoritative sequence: insertion order, duplicates allowed.
    elements: Buf,
    /// Same multiset, non-decreasing. The order among equal values is
    /// whatever binary-search insertion produced; callers must not rely
    /// on it.
    sorted: Buf,
    /// Alternating smallest/largest remaining elements of `sorted`.
    cross: Buf,
    /// Prime-valued elements in insertion order.
    primes: Buf,
    /// Memoized primality verdicts.
    cache: PrimeCache,
}

impl Store {
    /// The one accessor cursors go through.
    pub(crate) fn view(&self, kind: ViewKind) -> &[i64] {
        match kind {
            ViewKind::Ascending => &self.sorted,
            ViewKind::SideCross => &self.cross,
            ViewKind::Prime => &self.primes,
        }
    }

    fn insert(&mut self, value: i64) {
        self.elements.push(value);
        let at = match self.sorted.binary_search(&value) {
            Ok(idx) | Err(idx) => idx,
        };
        self.sorted.insert(at, value);
        if self.cache.check(value) {
            self.primes.push(value);
        }
        self.cross = side_cross_of(&self.sorted);
    }

    fn remove(&mut self, value: i64) -> Result<(), Error> {
        let at = match self.elements.iter().position(|&e| e == value) {
            Some(idx) => idx,
            None => return Err(Error::NotFound(value)),
        };
        self.elements.remove(at);
        self.rebuild_views();
        return Ok(());
    }

    /// Recompute all three views from `elements`.
    fn rebuild_views(&mut self) {
        self.sorted = self.elements.clone();
        self.sorted.sort();
        self.primes.clear();
        for &value in &self.elements {
            if self.cache.check(value) {
                self.primes.push(value);
            }
        }
        self.cross = side_cross_of(&self.sorted);
    }
}

/// A container of integers that maintains three live orderings of itself.
///
/// Every mutation updates all views before returning, so the cursors handed
/// out by [`ascending`](Trifold::ascending),
/// [`side_cross`](Trifold::side_cross), and [`primes`](Trifold::primes)
/// always observe the current contents.
pub struct Trifold {
    store: Rc<RefCell<Store>>,
}

impl Trifold {
    /// Create an empty container.
    pub fn new() -> Trifold {
        return Trifold {
            store: Rc::new(RefCell::new(Store::default())),
        };
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        return self.store.borrow().elements.len();
    }

    /// True when no elements are held.
    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// True when at least one occurrence of `value` is held.
    pub fn contains(&self, value: i64) -> bool {
        return self.store.borrow().elements.contains(&value);
    }

    /// Append `value` and bring all three views up to date. Always succeeds;
    /// duplicates are kept.
    pub fn insert(&mut self, value: i64) {
        self.store.borrow_mut().insert(value);
    }

    /// Remove one occurrence of `value`: the first by insertion order.
    ///
    /// Fails with [`Error::NotFound`] when the value is absent, leaving the
    /// container untouched.
    pub fn remove(&mut self, value: i64) -> Result<(), Error> {
        return self.store.borrow_mut().remove(value);
    }

    /// Snapshot of the insertion-order sequence.
    pub fn elements(&self) -> Vec<i64> {
        return self.store.borrow().elements.to_vec();
    }

    /// Cursor over the ascending view, positioned at the start.
    pub fn ascending(&self) -> AscendingCursor {
        return AscendingCursor::new(Rc::clone(&self.store));
    }

    /// Cursor over the side-cross view, positioned at the start.
    pub fn side_cross(&self) -> SideCrossCursor {
        return SideCrossCursor::new(Rc::clone(&self.store));
    }

    /// Cursor over the prime view, positioned at the start.
    pub fn primes(&self) -> PrimeCursor {
        return PrimeCursor::new(Rc::clone(&self.store));
    }
}

impl Default for Trifold {
    fn default() -> Self {
        return Self::new();
    }
}

impl Clone for Trifold {
    /// Deep copy: the clone gets its own store. Cursors bound to the
    /// original keep tracking the original, never the clone.
    fn clone(&self) -> Trifold {
        let store = self.store.borrow().clone();
        return Trifold {
            store: Rc::new(RefCell::new(store)),
        };
    }
}

impl PartialEq for Trifold {
    /// Containers are equal iff their insertion-order sequences are equal
    /// element for element. Derived views are functions of the elements and
    /// are not compared.
    fn eq(&self, other: &Trifold) -> bool {
        if Rc::ptr_eq(&self.store, &other.store) {
            return true;
        }
        return self.store.borrow().elements == other.store.borrow().elements;
    }
}

impl Eq for Trifold {}

impl Extend<i64> for Trifold {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i64> for Trifold {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Trifold {
        let mut list = Trifold::new();
        list.extend(iter);
        return list;
    }
}

impl fmt::Debug for Trifold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_list()
            .entries(self.store.borrow().elements.iter())
            .finish();
    }
}
