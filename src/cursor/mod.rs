//! Cursors over the container's three views.
//!
//! A cursor is a handle to a container plus a numeric position into one of
//! its views. The position is re-interpreted against the live view on every
//! access: a cursor never caches a pointer into backing storage, so a
//! mutation between accesses is observed rather than left dangling. A
//! position that a shrink left past the end is reported out of range at the
//! next access, not before.
//!
//! The three public variants share [`RawCursor`] for all positional state
//! and differ only in which view they read. [`Cursor`] is the capability
//! they all implement.

mod ascending;
mod prime;
mod side_cross;

pub use ascending::AscendingCursor;
pub use prime::PrimeCursor;
pub use side_cross::SideCrossCursor;

pub(crate) use side_cross::side_cross_of;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::container::Store;
use crate::error::Error;

/// Which derived view a cursor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Non-decreasing sorted order.
    Ascending,
    /// Alternating smallest/largest remaining of the sorted order.
    SideCross,
    /// Prime-valued elements in insertion order.
    Prime,
}

/// Forward-only traversal over one view of one container.
///
/// Positional state lives in the cursor; the view contents live in the
/// container. `begin` and `end` re-read the view, and comparisons check
/// that both cursors are bound to the same container before looking at
/// positions.
pub trait Cursor: Sized + Clone {
    /// Fresh cursor at offset 0 of the current view.
    fn begin(&self) -> Self;

    /// Fresh cursor at the past-the-end offset of the current view.
    fn end(&self) -> Self;

    /// The logical offset into the view.
    fn position(&self) -> usize;

    /// Element at the current position of the live view.
    ///
    /// Fails with [`Error::OutOfRange`] at or past the end, including
    /// positions that went stale when the container shrank.
    fn value(&self) -> Result<i64, Error>;

    /// Step forward by one position.
    ///
    /// Fails with [`Error::OutOfRange`] when already at or past the end of
    /// the live view.
    fn advance(&mut self) -> Result<(), Error>;

    /// Compare positions.
    ///
    /// Fails with [`Error::MismatchedContainers`] when the cursors are
    /// bound to different containers. Binding identity is what matters;
    /// two containers holding equal elements are still different bindings.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, Error>;

    /// Position equality, with the same binding check as
    /// [`try_cmp`](Cursor::try_cmp).
    fn try_eq(&self, other: &Self) -> Result<bool, Error> {
        return Ok(self.try_cmp(other)? == Ordering::Equal);
    }
}

/// State shared by all three cursor variants: a strong handle to the store,
/// the view being read, and a position into it.
///
/// Holding a strong handle means a cursor keeps the store alive; dropping
/// the container value does not invalidate outstanding cursors.
#[derive(Clone)]
pub(crate) struct RawCursor {
    store: Rc<RefCell<Store>>,
    kind: ViewKind,
    position: usize,
}

impl RawCursor {
    pub(crate) fn new(store: Rc<RefCell<Store>>, kind: ViewKind) -> RawCursor {
        return RawCursor {
            store,
            kind,
            position: 0,
        };
    }

    pub(crate) fn begin(&self) -> RawCursor {
        return RawCursor {
            store: Rc::clone(&self.store),
            kind: self.kind,
            position: 0,
        };
    }

    pub(crate) fn end(&self) -> RawCursor {
        let len = self.store.borrow().view(self.kind).len();
        return RawCursor {
            store: Rc::clone(&self.store),
            kind: self.kind,
            position: len,
        };
    }

    pub(crate) fn position(&self) -> usize {
        return self.position;
    }

    /// Re-resolve the position against the live view.
    pub(crate) fn value(&self) -> Result<i64, Error> {
        let store = self.store.borrow();
        let view = store.view(self.kind);
        match view.get(self.position) {
            Some(&value) => return Ok(value),
            None => {
                return Err(Error::OutOfRange {
                    position: self.position,
                    len: view.len(),
                });
            }
        }
    }

    pub(crate) fn advance(&mut self) -> Result<(), Error> {
        let len = self.store.borrow().view(self.kind).len();
        if self.position >= len {
            return Err(Error::OutOfRange {
                position: self.position,
                len,
            });
        }
        self.position += 1;
        return Ok(());
    }

    pub(crate) fn try_cmp(&self, other: &RawCursor) -> Result<Ordering, Error> {
        if !Rc::ptr_eq(&self.store, &other.store) {
            return Err(Error::MismatchedContainers);
        }
        return Ok(self.position.cmp(&other.position));
    }

    /// Current value, then step past it. `None` at the end of the live
    /// view; this is the `Iterator` face of the cursor.
    pub(crate) fn next_value(&mut self) -> Option<i64> {
        let value = self.value().ok()?;
        self.position += 1;
        return Some(value);
    }
}

impl fmt::Debug for RawCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("RawCursor")
            .field("kind", &self.kind)
            .field("position", &self.position)
            .finish();
    }
}
