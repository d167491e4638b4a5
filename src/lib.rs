//! Trifold - a container of integers with three live orderings.
//!
//! A [`Trifold`](container::Trifold) stores integers in insertion order and
//! keeps two more orderings of the same data continuously in sync: ascending
//! sorted order, and the side-cross order that alternates between the
//! smallest and largest remaining elements of the sorted sequence. A third,
//! filtered view holds the prime-valued elements in insertion order.
//!
//! Cursors over the three views are live: a cursor is a position, not a
//! snapshot, and re-reads its container on every access. Mutating the
//! container between accesses is observed by existing cursors rather than
//! invalidating them.
//!
//! # Quick Start
//!
//! ```
//! use trifold::container::Trifold;
//!
//! let mut list = Trifold::new();
//! for value in [17, 2, 25, 9, 3] {
//!     list.insert(value);
//! }
//!
//! let ascending: Vec<i64> = list.ascending().collect();
//! assert_eq!(ascending, vec![2, 3, 9, 17, 25]);
//!
//! let cross: Vec<i64> = list.side_cross().collect();
//! assert_eq!(cross, vec![2, 25, 3, 17, 9]);
//!
//! let primes: Vec<i64> = list.primes().collect();
//! assert_eq!(primes, vec![17, 2, 3]);
//! ```

pub mod container;
pub mod cursor;
pub mod error;
pub mod prime;
