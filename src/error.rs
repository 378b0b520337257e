/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`EmptyConstructionError`], [`WouldBecomeEmptyError`] and the [`NonEmptyError`] that wraps both of them

use std::fmt::{self, Display};

/// The kind of non-empty wrapper an error originated from
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CollectionKind {
	/// [`NonEmptySeq`](`crate::NonEmptySeq`)
	Sequence,

	/// [`NonEmptySet`](`crate::NonEmptySet`)
	Set,
}

impl CollectionKind {
	/// Returns the name of the wrapper type this kind stands for
	#[must_use]
	pub const fn type_name(self) -> &'static str {
		match self {
			CollectionKind::Sequence => "NonEmptySeq",
			CollectionKind::Set => "NonEmptySet",
		}
	}
}

impl Display for CollectionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.type_name())
	}
}

/// A non-empty wrapper was about to be constructed from zero elements.
///
/// Returned by the constructors and by every operation that derives a new wrapper from an existing one
/// when the derived contents turned out to be empty, e.g. [`NonEmptySeq::filter`](`crate::NonEmptySeq::filter`)
/// that didn't match a single element.
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[error("{kind} must not be empty")]
pub struct EmptyConstructionError {
	/// The wrapper that couldn't be constructed
	pub kind: CollectionKind,
}

/// A mutating operation would have left an existing non-empty wrapper without any elements.
///
/// The wrapper the operation was called on is always left exactly as it was before the call.
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[error("{kind} must not be empty")]
pub struct WouldBecomeEmptyError {
	/// The wrapper that rejected the operation
	pub kind: CollectionKind,
}

/// Either of the errors this crate can return
#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NonEmptyError {
	#[error(transparent)]
	EmptyConstruction(#[from] EmptyConstructionError),

	#[error(transparent)]
	WouldBecomeEmpty(#[from] WouldBecomeEmptyError),
}

impl NonEmptyError {
	/// Returns the kind of wrapper that returned this error
	#[must_use]
	pub const fn kind(&self) -> CollectionKind {
		match self {
			NonEmptyError::EmptyConstruction(e) => e.kind,
			NonEmptyError::WouldBecomeEmpty(e) => e.kind,
		}
	}
}

impl EmptyConstructionError {
	pub(crate) const fn new(kind: CollectionKind) -> Self {
		Self { kind }
	}
}

impl WouldBecomeEmptyError {
	pub(crate) const fn new(kind: CollectionKind) -> Self {
		Self { kind }
	}
}
