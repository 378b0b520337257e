/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`NonEmpty`] trait implemented by every wrapper of this crate

use std::num::NonZeroUsize;

use crate::error::CollectionKind;

/// A collection that is guaranteed to contain at least one element.
///
/// Code that only cares about the "never empty" part can be generic over this trait,
/// while code written against the base collection keeps working through [`NonEmpty::as_base`],
/// [`NonEmpty::into_base`] and the `Deref`/`AsRef`/`Borrow` impls of the wrappers.
///
/// This trait is sealed.
pub trait NonEmpty: sealed::Sealed {
	/// The collection this type wraps
	type Base;

	/// The kind of wrapper this is, used in errors and logs
	const KIND: CollectionKind;

	/// Returns the number of elements, which is never zero
	fn len_nonzero(&self) -> NonZeroUsize;

	/// Returns a shared reference to the wrapped collection
	fn as_base(&self) -> &Self::Base;

	/// Unwraps the collection, giving up the non-empty guarantee
	fn into_base(self) -> Self::Base;
}

pub(crate) mod sealed {
	pub trait Sealed {}
}

/// Converts a length of a collection that upholds the invariant into a [`NonZeroUsize`]
pub(crate) fn nonzero_len(len: usize) -> NonZeroUsize {
	NonZeroUsize::new(len).expect("non-empty wrapper invariant guarantees at least one element")
}
