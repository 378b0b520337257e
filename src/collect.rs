/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`CollectNonEmpty`] extension trait

use std::hash::Hash;

use crate::{EmptyConstructionError, NonEmptySeq, NonEmptySet};

/// Collects an iterator into one of the non-empty wrappers.
///
/// Implemented for every [`Iterator`].
///
/// # Examples
///
/// ```
/// use never_empty::CollectNonEmpty;
///
/// let evens = (1..10).filter(|x| x % 2 == 0).try_collect_nonempty_seq()?;
/// assert_eq!(evens, [2, 4, 6, 8]);
///
/// assert!((1..10).filter(|x| *x > 100).try_collect_nonempty_set().is_err());
/// # Ok::<(), never_empty::EmptyConstructionError>(())
/// ```
pub trait CollectNonEmpty: Iterator {
	/// Collects all items into a [`NonEmptySeq`], in order.
	///
	/// # Errors
	/// If the iterator didn't yield a single item
	fn try_collect_nonempty_seq(self) -> Result<NonEmptySeq<Self::Item>, EmptyConstructionError>
	where
		Self: Sized,
	{
		NonEmptySeq::from_iterable(self)
	}

	/// Collects all items into a [`NonEmptySet`].
	///
	/// # Errors
	/// If the iterator didn't yield a single item
	fn try_collect_nonempty_set(self) -> Result<NonEmptySet<Self::Item>, EmptyConstructionError>
	where
		Self: Sized,
		Self::Item: Eq + Hash,
	{
		NonEmptySet::from_iterable(self)
	}
}

impl<I: Iterator> CollectNonEmpty for I {}
