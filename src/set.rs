/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmptySet`], a `HashSet` that can never become empty

use std::{
	borrow::Borrow,
	collections::{HashSet, hash_set},
	fmt::{self, Display},
	hash::Hash,
	num::NonZeroUsize,
	ops::Deref,
};

use itertools::Itertools;

use crate::{
	NonEmptySeq,
	error::{CollectionKind, EmptyConstructionError, WouldBecomeEmptyError},
	non_empty::{NonEmpty, nonzero_len, sealed},
};

const KIND: CollectionKind = CollectionKind::Set;

/// A hash set that is guaranteed to contain at least one element.
///
/// All read-only operations of [`HashSet`] are available through `Deref`.
/// Removals ([`remove`](`Self::remove`), [`take`](`Self::take`), [`retain`](`Self::retain`)) return
/// [`WouldBecomeEmptyError`] and leave the set untouched if they would remove the last element,
/// and [`clear`](`Self::clear`) is always rejected.
///
/// # Examples
///
/// ```
/// use never_empty::NonEmptySet;
///
/// let mut set = NonEmptySet::create([2, 3])?;
///
/// assert_eq!(set.remove(&3), Ok(true));
/// assert!(set.remove(&2).is_err());
/// assert!(set.contains(&2));
/// # Ok::<(), never_empty::EmptyConstructionError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[derive(Debug, Clone)]
pub struct NonEmptySet<T>(HashSet<T>);

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmptySet<T>
where
	T: serde::Deserialize<'de> + Eq + Hash,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let set = HashSet::deserialize(deserializer)?;
		NonEmptySet::from_set(set)
			.map_err(|_| serde::de::Error::custom("cannot deserialize empty set as NonEmptySet"))
	}
}

impl<T> NonEmptySet<T> {
	/// Wraps a [`HashSet`].
	///
	/// # Errors
	/// If `set` is empty
	pub fn from_set(set: HashSet<T>) -> Result<Self, EmptyConstructionError> {
		if set.is_empty() {
			tracing::trace!("Refusing to construct an empty {KIND}");
			Err(EmptyConstructionError::new(KIND))
		} else {
			Ok(Self(set))
		}
	}

	/// Gets a reference to the underlying [`HashSet`]
	pub fn as_set(&self) -> &HashSet<T> {
		&self.0
	}

	/// Converts the [`NonEmptySet`] back into a [`HashSet`], consuming self
	pub fn into_set(self) -> HashSet<T> {
		self.0
	}

	/// Returns the number of elements in the set
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns the number of elements in the set as a [`NonZeroUsize`]
	#[expect(clippy::same_name_method, reason = "usable without importing the NonEmpty trait")]
	pub fn len_nonzero(&self) -> NonZeroUsize {
		nonzero_len(self.0.len())
	}

	/// Always returns `false`
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Always fails, clearing a set would always leave it empty.
	///
	/// # Errors
	/// Always
	pub fn clear(&mut self) -> Result<(), WouldBecomeEmptyError> {
		Err(reject("clear"))
	}
}

impl<T> NonEmptySet<T>
where
	T: Eq + Hash,
{
	/// Creates a new [`NonEmptySet`] containing a single element
	pub fn new(value: T) -> Self {
		Self(HashSet::from([value]))
	}

	/// Creates a new [`NonEmptySet`] from one element and any number of others
	pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut set = HashSet::from([head]);
		set.extend(tail);

		Self(set)
	}

	/// Creates a new [`NonEmptySet`] containing `values`, without duplicates.
	///
	/// # Errors
	/// If `values` is an empty array
	pub fn create<const N: usize>(values: [T; N]) -> Result<Self, EmptyConstructionError> {
		Self::from_set(HashSet::from(values))
	}

	/// Creates a new [`NonEmptySet`] from all items `source` yields, without duplicates.
	///
	/// # Errors
	/// If `source` didn't yield a single item
	pub fn from_iterable<I>(source: I) -> Result<Self, EmptyConstructionError>
	where
		I: IntoIterator<Item = T>,
	{
		Self::from_set(source.into_iter().collect())
	}

	/// Adds a value to the set.
	///
	/// Returns whether the value was newly inserted
	pub fn insert(&mut self, value: T) -> bool {
		self.0.insert(value)
	}

	/// Reserves capacity for at least `additional` more elements
	pub fn reserve(&mut self, additional: usize) {
		self.0.reserve(additional);
	}

	/// Shrinks the capacity of the set as much as possible
	pub fn shrink_to_fit(&mut self) {
		self.0.shrink_to_fit();
	}

	/// Adds a value to the set, replacing the existing equal value, if any, and returning it
	pub fn replace(&mut self, value: T) -> Option<T> {
		self.0.replace(value)
	}

	/// Removes a value from the set, returning whether it was present.
	///
	/// # Errors
	/// If `value` is the only element left. The set is left unchanged
	pub fn remove<Q>(&mut self, value: &Q) -> Result<bool, WouldBecomeEmptyError>
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		if self.would_remove_last(value) {
			return Err(reject("remove"));
		}

		Ok(self.0.remove(value))
	}

	/// Removes and returns the value in the set equal to `value`, if any.
	///
	/// # Errors
	/// If `value` is the only element left. The set is left unchanged
	pub fn take<Q>(&mut self, value: &Q) -> Result<Option<T>, WouldBecomeEmptyError>
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		if self.would_remove_last(value) {
			return Err(reject("take"));
		}

		Ok(self.0.take(value))
	}

	/// Retains only the elements `f` returns `true` for.
	///
	/// `f` is called exactly once for each element, in unspecified order.
	///
	/// # Errors
	/// If `f` didn't return `true` for a single element. The set is left unchanged
	pub fn retain<F>(&mut self, f: F) -> Result<(), WouldBecomeEmptyError>
	where
		F: FnMut(&T) -> bool,
	{
		let mut scratch = Scratch::drain(&mut self.0);

		let verdicts = scratch.items.iter().map(f).collect::<Vec<bool>>();
		if !verdicts.contains(&true) {
			return Err(reject("retain"));
		}

		let mut verdicts = verdicts.into_iter();
		scratch.items.retain(|_| verdicts.next().unwrap_or(true));

		Ok(())
	}

	fn would_remove_last<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.0.len() == 1 && self.0.contains(value)
	}

	/// Returns a new [`NonEmptySet`] with all elements of both sets
	#[must_use]
	pub fn union(&self, other: &HashSet<T>) -> Self
	where
		T: Clone,
	{
		Self(self.0.union(other).cloned().collect())
	}

	/// Returns a new [`NonEmptySet`] with the elements present in both sets.
	///
	/// # Errors
	/// If the sets have no elements in common
	pub fn intersection(&self, other: &HashSet<T>) -> Result<Self, EmptyConstructionError>
	where
		T: Clone,
	{
		Self::from_iterable(self.0.intersection(other).cloned())
	}

	/// Returns a new [`NonEmptySet`] with the elements of self that aren't present in `other`.
	///
	/// # Errors
	/// If every element of self is present in `other`
	pub fn difference(&self, other: &HashSet<T>) -> Result<Self, EmptyConstructionError>
	where
		T: Clone,
	{
		Self::from_iterable(self.0.difference(other).cloned())
	}

	/// Returns a new [`NonEmptySet`] with the elements present in exactly one of the sets.
	///
	/// # Errors
	/// If both sets contain the same elements
	pub fn symmetric_difference(&self, other: &HashSet<T>) -> Result<Self, EmptyConstructionError>
	where
		T: Clone,
	{
		Self::from_iterable(self.0.symmetric_difference(other).cloned())
	}

	/// Returns a new [`NonEmptySet`] with the elements `f` returns `true` for.
	///
	/// # Errors
	/// If `f` didn't return `true` for a single element
	pub fn filter<F>(&self, mut f: F) -> Result<Self, EmptyConstructionError>
	where
		F: FnMut(&T) -> bool,
		T: Clone,
	{
		Self::from_iterable(self.0.iter().filter(|x| f(x)).cloned())
	}

	/// Returns a new [`NonEmptySet`] with `f` applied to every element.
	///
	/// The result may have fewer elements if `f` maps different elements to equal values.
	pub fn map<U, F>(&self, f: F) -> NonEmptySet<U>
	where
		U: Eq + Hash,
		F: FnMut(&T) -> U,
	{
		NonEmptySet(self.0.iter().map(f).collect())
	}
}

fn reject(operation: &str) -> WouldBecomeEmptyError {
	tracing::debug!("Rejected {operation} that would have left the {KIND} empty");
	WouldBecomeEmptyError::new(KIND)
}

/// Elements temporarily moved out of a set.
///
/// Whatever is left in `items` goes back into the set on drop, even if a predicate panicked midway.
struct Scratch<'a, T: Eq + Hash> {
	set: &'a mut HashSet<T>,
	items: Vec<T>,
}

impl<'a, T: Eq + Hash> Scratch<'a, T> {
	fn drain(set: &'a mut HashSet<T>) -> Self {
		let items = set.drain().collect();
		Self { set, items }
	}
}

impl<T: Eq + Hash> Drop for Scratch<'_, T> {
	fn drop(&mut self) {
		self.set.extend(self.items.drain(..));
	}
}

impl<T> sealed::Sealed for NonEmptySet<T> {}

impl<T> NonEmpty for NonEmptySet<T> {
	type Base = HashSet<T>;

	const KIND: CollectionKind = KIND;

	fn len_nonzero(&self) -> NonZeroUsize {
		NonEmptySet::len_nonzero(self)
	}

	fn as_base(&self) -> &Self::Base {
		&self.0
	}

	fn into_base(self) -> Self::Base {
		self.0
	}
}

// no DerefMut, HashSet::clear and HashSet::drain would empty the set
impl<T> Deref for NonEmptySet<T> {
	type Target = HashSet<T>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<HashSet<T>> for NonEmptySet<T> {
	fn as_ref(&self) -> &HashSet<T> {
		&self.0
	}
}

impl<T> Borrow<HashSet<T>> for NonEmptySet<T> {
	fn borrow(&self) -> &HashSet<T> {
		&self.0
	}
}

impl<T: Eq + Hash> PartialEq for NonEmptySet<T> {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl<T: Eq + Hash> Eq for NonEmptySet<T> {}

impl<T: Eq + Hash> PartialEq<HashSet<T>> for NonEmptySet<T> {
	fn eq(&self, other: &HashSet<T>) -> bool {
		self.0 == *other
	}
}

impl<T: Eq + Hash> PartialEq<NonEmptySet<T>> for HashSet<T> {
	fn eq(&self, other: &NonEmptySet<T>) -> bool {
		*self == other.0
	}
}

impl<T: Eq + Hash> Extend<T> for NonEmptySet<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for NonEmptySet<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<T> IntoIterator for NonEmptySet<T> {
	type Item = T;
	type IntoIter = hash_set::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a NonEmptySet<T> {
	type Item = &'a T;
	type IntoIter = hash_set::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> From<NonEmptySet<T>> for HashSet<T> {
	fn from(set: NonEmptySet<T>) -> Self {
		set.0
	}
}

impl<T> TryFrom<HashSet<T>> for NonEmptySet<T> {
	type Error = EmptyConstructionError;

	fn try_from(set: HashSet<T>) -> Result<Self, Self::Error> {
		Self::from_set(set)
	}
}

impl<T: Eq + Hash> From<NonEmptySeq<T>> for NonEmptySet<T> {
	fn from(seq: NonEmptySeq<T>) -> Self {
		Self(seq.into_iter().collect())
	}
}

/// Formats as `NonEmptySet{a,b,c}`, in iteration order
impl<T: Display> Display for NonEmptySet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{KIND}{{{}}}", self.0.iter().format(","))
	}
}
