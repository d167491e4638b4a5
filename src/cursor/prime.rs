//! Cursor over the prime-filtered view.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use super::Cursor;
use super::RawCursor;
use super::ViewKind;
use crate::container::Store;
use crate::error::Error;

/// Traverses the container's prime-valued elements in insertion order.
///
/// This view is usually shorter than the other two: its past-the-end offset
/// is the prime count, not the element count.
#[derive(Debug, Clone)]
pub struct PrimeCursor {
    raw: RawCursor,
}

impl PrimeCursor {
    pub(crate) fn new(store: Rc<RefCell<Store>>) -> PrimeCursor {
        return PrimeCursor {
            raw: RawCursor::new(store, ViewKind::Prime),
        };
    }
}

impl Cursor for PrimeCursor {
    fn begin(&self) -> PrimeCursor {
        return PrimeCursor { raw: self.raw.begin() };
    }

    fn end(&self) -> PrimeCursor {
        return PrimeCursor { raw: self.raw.end() };
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

    fn try_cmp(&self, other: &PrimeCursor) -> Result<Ordering, Error> {
        return self.raw.try_cmp(&other.raw);
    }
}

impl Iterator for PrimeCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        return self.raw.next_value();
    }
}
