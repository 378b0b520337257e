/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Collections that can never become empty.
//!
//! This crate provides wrappers around `Vec` and `HashSet` that are guaranteed to contain at least one element
//! from the moment they are constructed. They behave like the collection they wrap, except for operations
//! that could remove the last element: those check the outcome first and, if it would be empty,
//! return an error without touching the collection.
//!
//! # Features
//!
//! - [`NonEmptySeq<T>`]: a vector that always contains at least one element
//! - [`NonEmptySet<T>`]: a hash set that always contains at least one element
//! - [`NonEmpty`]: a trait implemented by both, for code that is generic over "any non-empty collection"
//! - [`CollectNonEmpty`]: collect any iterator into one of the above
//! - Optional serde support via the "serde" feature. Both wrappers (de)serialize exactly like the collection they wrap
//!
//! # Errors
//!
//! - [`EmptyConstructionError`] is returned when a wrapper would be created from zero elements,
//!   either directly or by an operation that derives a new wrapper, e.g. [`NonEmptySeq::filter`]
//! - [`WouldBecomeEmptyError`] is returned when an operation would remove the last element of an existing wrapper.
//!   The wrapper is left unchanged
//!
//! # Example
//!
//! ```
//! use never_empty::{NonEmptySeq, NonEmptySet, nonempty_seq};
//!
//! let mut seq = nonempty_seq![1, 2, 3, 4];
//! assert_eq!(seq.pop(), Ok(4));
//! assert_eq!(seq.first(), &1); // no Option to unwrap
//!
//! assert!(seq.drain(..).is_err());
//! assert_eq!(seq, [1, 2, 3]);
//!
//! assert!(seq.filter(|x| *x > 10).is_err());
//!
//! let mut set = NonEmptySet::create(["a"])?;
//! assert!(set.clear().is_err());
//! # Ok::<(), never_empty::NonEmptyError>(())
//! ```

mod collect;
mod error;
mod non_empty;
mod seq;
mod set;

pub use self::{
	collect::CollectNonEmpty,
	error::{CollectionKind, EmptyConstructionError, NonEmptyError, WouldBecomeEmptyError},
	non_empty::NonEmpty,
	seq::NonEmptySeq,
	set::NonEmptySet,
};

/// Creates a [`NonEmptySeq`] containing the arguments, in order.
///
/// At least one argument is required, so this never fails.
///
/// ```
/// use never_empty::nonempty_seq;
///
/// let seq = nonempty_seq!["a", "b"];
/// assert_eq!(seq, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! nonempty_seq {
	($head:expr $(, $tail:expr)* $(,)?) => {
		$crate::NonEmptySeq::from_head_and_tail($head, [$($tail),*])
	};
}

/// Creates a [`NonEmptySet`] containing the arguments.
///
/// At least one argument is required, so this never fails.
///
/// ```
/// use never_empty::nonempty_set;
///
/// let set = nonempty_set![1, 2, 2];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! nonempty_set {
	($head:expr $(, $tail:expr)* $(,)?) => {
		$crate::NonEmptySet::from_head_and_tail($head, [$($tail),*])
	};
}
