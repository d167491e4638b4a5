//! Cursor over the side-cross view, and the construction of that view.
//!
//! The side-cross order alternates between the smallest and largest
//! remaining elements of the sorted sequence: smallest first, then largest,
//! then second smallest, then second largest, converging inward. The
//! unpaired middle element of an odd-length sequence is emitted exactly
//! once, in its turn.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use super::Cursor;
use super::RawCursor;
use super::ViewKind;
use crate::container::Buf;
use crate::container::Store;
use crate::error::Error;

/// Build the side-cross order from an already-sorted sequence.
///
/// Walks a `lo` frontier forward and a `hi` frontier backward, emitting
/// from `lo` first and alternating until the frontiers meet.
pub(crate) fn side_cross_of(sorted: &[i64]) -> Buf {
    let mut out = Buf::with_capacity(sorted.len());
    if sorted.is_empty() {
        return out;
    }

    let mut lo = 0;
    let mut hi = sorted.len() - 1;
    loop {
        out.push(sorted[lo]);
        if lo == hi {
            break;
        }
        lo += 1;

        out.push(sorted[hi]);
        if hi == lo {
            break;
        }
        hi -= 1;
    }
    return out;
}

/// Traverses the container's elements in side-cross order.
#[derive(Debug, Clone)]
pub struct SideCrossCursor {
    raw: RawCursor,
}

impl SideCrossCursor {
    pub(crate) fn new(store: Rc<RefCell<Store>>) -> SideCrossCursor {
        return SideCrossCursor {
            raw: RawCursor::new(store, ViewKind::SideCross),
        };
    }
}

impl Cursor for SideCrossCursor {
    fn begin(&self) -> SideCrossCursor {
        return SideCrossCursor { raw: self.raw.begin() };
    }

    fn end(&self) -> SideCrossCursor {
        return SideCrossCursor { raw: self.raw.end() };
    }

    fn position(&self) -> usize {
        return self.raw.position();
    }

    fn value(&self) -> Result<i64, Error> {
        return self.raw.value();
    }

    fn advance(&mut self) -> Result<(), Error> {
        return self.raw.advance();
    }

    fn try_cmp(&self, other: &SideCrossCursor) -> Result<Ordering, Error> {
        return self.raw.try_cmp(&other.raw);
    }
}

impl Iterator for SideCrossCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        return self.raw.next_value();
    }
}
