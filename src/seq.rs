/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmptySeq`], a `Vec` that can never become empty

use std::{
	borrow::{Borrow, BorrowMut},
	fmt::{self, Display},
	num::NonZeroUsize,
	ops::{Bound, Deref, DerefMut, Range, RangeBounds},
	slice, vec,
};

use itertools::Itertools;

use crate::{
	error::{CollectionKind, EmptyConstructionError, WouldBecomeEmptyError},
	non_empty::{NonEmpty, nonzero_len, sealed},
};

const KIND: CollectionKind = CollectionKind::Sequence;

/// A vector that is guaranteed to contain at least one element.
///
/// [`NonEmptySeq`] owns a private `Vec` and exposes the same operations, sorted into a few groups:
///
/// - operations that may shrink the vector ([`splice`](`Self::splice`), [`drain`](`Self::drain`),
///   [`truncate`](`Self::truncate`), [`pop`](`Self::pop`), [`remove`](`Self::remove`), [`retain`](`Self::retain`), ...)
///   first check what the length would be afterwards and return [`WouldBecomeEmptyError`] without touching the vector
///   if it would become zero
/// - operations that derive a new vector ([`slice`](`Self::slice`), [`filter`](`Self::filter`), [`map`](`Self::map`), ...)
///   return a new [`NonEmptySeq`], or [`EmptyConstructionError`] if the result has no elements
/// - operations that reorder or overwrite elements in place ([`reverse`](`Self::reverse`), [`sort`](`Self::sort`),
///   [`fill`](`Self::fill`), ...) return the same instance for chaining
/// - everything else, e.g. indexing, iteration and searching, is forwarded to the slice through `Deref`/`DerefMut`
///
/// # Examples
///
/// ```
/// use never_empty::NonEmptySeq;
///
/// let mut seq = NonEmptySeq::create([1, 2, 3, 4])?;
///
/// assert_eq!(seq.drain(0..2)?, [1, 2]);
/// assert_eq!(seq, [3, 4]);
///
/// // would drain everything, the sequence is left untouched
/// assert!(seq.drain(..).is_err());
/// assert_eq!(seq, [3, 4]);
/// # Ok::<(), never_empty::NonEmptyError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptySeq<T>(Vec<T>);

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmptySeq<T>
where
	T: serde::Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let vec = Vec::deserialize(deserializer)?;
		NonEmptySeq::from_vec(vec).map_err(|_| {
			serde::de::Error::custom("cannot deserialize empty sequence as NonEmptySeq")
		})
	}
}

impl<T> NonEmptySeq<T> {
	/// Creates a new [`NonEmptySeq`] containing a single element
	pub fn new(value: T) -> Self {
		Self(vec![value])
	}

	/// Creates a new [`NonEmptySeq`] from a first element followed by the rest of them
	pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let tail = tail.into_iter();
		let mut vec = Vec::with_capacity(1 + tail.size_hint().0);
		vec.push(head);
		vec.extend(tail);

		Self(vec)
	}

	/// Creates a new [`NonEmptySeq`] containing exactly `values`, in order.
	///
	/// # Errors
	/// If `values` is an empty array
	pub fn create<const N: usize>(values: [T; N]) -> Result<Self, EmptyConstructionError> {
		Self::from_vec(Vec::from(values))
	}

	/// Creates a new [`NonEmptySeq`] from all items `source` yields.
	///
	/// # Errors
	/// If `source` didn't yield a single item
	pub fn from_iterable<I>(source: I) -> Result<Self, EmptyConstructionError>
	where
		I: IntoIterator<Item = T>,
	{
		Self::from_vec(source.into_iter().collect())
	}

	/// Wraps a [`Vec`].
	///
	/// # Errors
	/// If `vec` is empty
	pub fn from_vec(vec: Vec<T>) -> Result<Self, EmptyConstructionError> {
		if vec.is_empty() {
			tracing::trace!("Refusing to construct an empty {KIND}");
			Err(EmptyConstructionError::new(KIND))
		} else {
			Ok(Self(vec))
		}
	}

	/// Gets a reference to the underlying Vec
	pub fn as_vec(&self) -> &Vec<T> {
		&self.0
	}

	/// Converts the [`NonEmptySeq`] back into a Vec, consuming self
	pub fn into_vec(self) -> Vec<T> {
		self.0
	}

	/// Returns a slice containing the entire vector
	pub fn as_slice(&self) -> &[T] {
		self.0.as_slice()
	}

	/// Returns the length of the vector
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns the length of the vector as a [`NonZeroUsize`]
	#[expect(clippy::same_name_method, reason = "usable without importing the NonEmpty trait")]
	pub fn len_nonzero(&self) -> NonZeroUsize {
		nonzero_len(self.0.len())
	}

	/// Always returns `false`
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns a reference to the first element
	pub fn first(&self) -> &T {
		self.0
			.first()
			.expect("NonEmptySeq invariant guarantees at least one element")
	}

	/// Returns a mutable reference to the first element
	pub fn first_mut(&mut self) -> &mut T {
		self.0
			.first_mut()
			.expect("NonEmptySeq invariant guarantees at least one element")
	}

	/// Returns a reference to the last element
	pub fn last(&self) -> &T {
		self.0
			.last()
			.expect("NonEmptySeq invariant guarantees at least one element")
	}

	/// Returns a mutable reference to the last element
	pub fn last_mut(&mut self) -> &mut T {
		self.0
			.last_mut()
			.expect("NonEmptySeq invariant guarantees at least one element")
	}

	/// Returns the first element and the rest of the elements, which may be empty
	pub fn split_first(&self) -> (&T, &[T]) {
		self.0
			.split_first()
			.expect("NonEmptySeq invariant guarantees at least one element")
	}

	/// Appends an element onto the end of the vector
	pub fn push(&mut self, value: T) {
		self.0.push(value);
	}

	/// Inserts an element at the given index, shifting all elements after it to the right
	///
	/// # Panics
	/// If `index > len`
	pub fn insert(&mut self, index: usize, value: T) {
		self.0.insert(index, value);
	}

	/// Moves all elements of `other` into self, leaving `other` empty
	pub fn append(&mut self, other: &mut Vec<T>) {
		self.0.append(other);
	}

	/// Clones and appends all elements of `other`
	pub fn extend_from_slice(&mut self, other: &[T])
	where
		T: Clone,
	{
		self.0.extend_from_slice(other);
	}

	/// Returns the number of elements the vector can hold without reallocating
	pub fn capacity(&self) -> usize {
		self.0.capacity()
	}

	/// Reserves capacity for at least `additional` more elements
	pub fn reserve(&mut self, additional: usize) {
		self.0.reserve(additional);
	}

	/// Shrinks the capacity of the vector as much as possible
	pub fn shrink_to_fit(&mut self) {
		self.0.shrink_to_fit();
	}

	/// Always fails, clearing a vector would always leave it empty.
	///
	/// See [`clear_except_first`](`Self::clear_except_first`) for a version that keeps the first element.
	///
	/// # Errors
	/// Always
	pub fn clear(&mut self) -> Result<(), WouldBecomeEmptyError> {
		Err(reject("clear"))
	}

	/// Splits the vector in two at `at`, returning the elements `[at, len)` and keeping `[0, at)`.
	///
	/// # Errors
	/// If `at` is zero. The vector is left unchanged
	///
	/// # Panics
	/// If `at > len`
	pub fn split_off(&mut self, at: usize) -> Result<Vec<T>, WouldBecomeEmptyError> {
		if at == 0 {
			return Err(reject("split_off"));
		}

		Ok(self.0.split_off(at))
	}

	/// Removes the elements in `range` and inserts the items of `replace_with` in their place,
	/// returning the removed elements.
	///
	/// `range` is clamped to the bounds of the vector. A range that starts after it ends removes nothing and inserts at its start.
	///
	/// # Errors
	/// If no elements would be left afterwards. The vector is left unchanged
	pub fn splice<R, I>(&mut self, range: R, replace_with: I) -> Result<Vec<T>, WouldBecomeEmptyError>
	where
		R: RangeBounds<usize>,
		I: IntoIterator<Item = T>,
	{
		let range = clamp_range(&range, self.0.len());
		let replace_with = replace_with.into_iter().collect::<Vec<_>>();

		if self.0.len() - range.len() + replace_with.len() == 0 {
			return Err(reject("splice"));
		}

		Ok(self.0.splice(range, replace_with).collect())
	}

	/// Removes the elements in `range`, returning them.
	///
	/// `range` is clamped to the bounds of the vector.
	///
	/// # Errors
	/// If `range` covers every element. The vector is left unchanged
	pub fn drain<R>(&mut self, range: R) -> Result<Vec<T>, WouldBecomeEmptyError>
	where
		R: RangeBounds<usize>,
	{
		let range = clamp_range(&range, self.0.len());
		if range.len() == self.0.len() {
			return Err(reject("drain"));
		}

		Ok(self.0.drain(range).collect())
	}

	/// Shortens the vector to `len` elements. Does nothing if `len` is greater than the current length.
	///
	/// # Errors
	/// If `len` is zero
	pub fn truncate(&mut self, len: usize) -> Result<(), WouldBecomeEmptyError> {
		if len == 0 {
			return Err(reject("truncate"));
		}

		self.0.truncate(len);
		Ok(())
	}

	/// Resizes the vector to `new_len`, filling new slots with clones of `value`
	///
	/// # Errors
	/// If `new_len` is zero
	pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), WouldBecomeEmptyError>
	where
		T: Clone,
	{
		if new_len == 0 {
			return Err(reject("resize"));
		}

		self.0.resize(new_len, value);
		Ok(())
	}

	/// Resizes the vector to `new_len`, filling new slots with values returned by `f`
	///
	/// # Errors
	/// If `new_len` is zero
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), WouldBecomeEmptyError>
	where
		F: FnMut() -> T,
	{
		if new_len == 0 {
			return Err(reject("resize"));
		}

		self.0.resize_with(new_len, f);
		Ok(())
	}

	/// Removes the last element and returns it.
	///
	/// # Errors
	/// If it's the only element left
	pub fn pop(&mut self) -> Result<T, WouldBecomeEmptyError> {
		(self.0.len() > 1)
			.then(|| self.0.pop())
			.flatten()
			.ok_or_else(|| reject("pop"))
	}

	/// Removes and returns the element at `index`, shifting all elements after it to the left.
	///
	/// # Errors
	/// If it's the only element left
	///
	/// # Panics
	/// If `index` is out of bounds
	pub fn remove(&mut self, index: usize) -> Result<T, WouldBecomeEmptyError> {
		if self.0.len() == 1 {
			return Err(reject("remove"));
		}

		Ok(self.0.remove(index))
	}

	/// Removes and returns the element at `index`, replacing it with the last element.
	///
	/// # Errors
	/// If it's the only element left
	///
	/// # Panics
	/// If `index` is out of bounds
	pub fn swap_remove(&mut self, index: usize) -> Result<T, WouldBecomeEmptyError> {
		if self.0.len() == 1 {
			return Err(reject("swap_remove"));
		}

		Ok(self.0.swap_remove(index))
	}

	/// Retains only the elements `f` returns `true` for.
	///
	/// `f` is called exactly once for each element, in order.
	///
	/// # Errors
	/// If `f` didn't return `true` for a single element. The vector is left unchanged
	pub fn retain<F>(&mut self, mut f: F) -> Result<(), WouldBecomeEmptyError>
	where
		F: FnMut(&T) -> bool,
	{
		let keep = self.0.iter().map(&mut f).collect::<Vec<bool>>();
		if !keep.contains(&true) {
			return Err(reject("retain"));
		}

		let mut keep = keep.into_iter();
		self.0.retain(|_| keep.next().unwrap_or(true));

		Ok(())
	}

	/// Retains only the elements `f` returns `true` for, allowing `f` to modify them.
	///
	/// `f` runs exactly once for each element, in order, on a copy of the vector that replaces it only on success.
	///
	/// # Errors
	/// If `f` didn't return `true` for a single element. The vector is left unchanged, including any modifications `f` made
	pub fn retain_mut<F>(&mut self, mut f: F) -> Result<(), WouldBecomeEmptyError>
	where
		F: FnMut(&mut T) -> bool,
		T: Clone,
	{
		let mut scratch = self.0.clone();
		let keep = scratch.iter_mut().map(&mut f).collect::<Vec<bool>>();
		if !keep.contains(&true) {
			return Err(reject("retain_mut"));
		}

		let mut keep = keep.into_iter();
		scratch.retain(|_| keep.next().unwrap_or(true));
		self.0 = scratch;

		Ok(())
	}

	/// Removes all elements except the first one
	pub fn clear_except_first(&mut self) {
		self.0.truncate(1);
	}

	/// Reverses the order of elements in place
	pub fn reverse(&mut self) -> &mut Self {
		self.0.reverse();
		self
	}

	/// Sorts the vector in place, preserving the order of equal elements
	pub fn sort(&mut self) -> &mut Self
	where
		T: Ord,
	{
		self.0.sort();
		self
	}

	/// Sorts the vector in place with a comparator function, preserving the order of equal elements
	pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
	where
		F: FnMut(&T, &T) -> std::cmp::Ordering,
	{
		self.0.sort_by(compare);
		self
	}

	/// Sorts the vector in place with a key extraction function, preserving the order of equal elements
	pub fn sort_by_key<K, F>(&mut self, f: F) -> &mut Self
	where
		F: FnMut(&T) -> K,
		K: Ord,
	{
		self.0.sort_by_key(f);
		self
	}

	/// Sorts the vector in place without preserving the order of equal elements
	pub fn sort_unstable(&mut self) -> &mut Self
	where
		T: Ord,
	{
		self.0.sort_unstable();
		self
	}

	/// Overwrites every element with clones of `value`
	pub fn fill(&mut self, value: T) -> &mut Self
	where
		T: Clone,
	{
		self.0.fill(value);
		self
	}

	/// Copies the elements in `src` to the position starting at `dest`, in place.
	///
	/// # Panics
	/// If `src` is out of bounds or the copied elements wouldn't fit starting at `dest`
	pub fn copy_within<R>(&mut self, src: R, dest: usize) -> &mut Self
	where
		R: RangeBounds<usize>,
		T: Copy,
	{
		self.0.copy_within(src, dest);
		self
	}

	/// Rotates the vector in place so that the element at `mid % len` becomes the first one
	pub fn rotate_left(&mut self, mid: usize) -> &mut Self {
		let len = self.0.len();
		self.0.rotate_left(mid % len);
		self
	}

	/// Rotates the vector in place so that the last `k % len` elements move to the front
	pub fn rotate_right(&mut self, k: usize) -> &mut Self {
		let len = self.0.len();
		self.0.rotate_right(k % len);
		self
	}

	/// Removes consecutive repeated elements. The first element is always kept
	pub fn dedup(&mut self) -> &mut Self
	where
		T: PartialEq,
	{
		self.0.dedup();
		self
	}

	/// Removes consecutive elements `same_bucket` considers equal. The first element is always kept
	pub fn dedup_by<F>(&mut self, same_bucket: F) -> &mut Self
	where
		F: FnMut(&mut T, &mut T) -> bool,
	{
		self.0.dedup_by(same_bucket);
		self
	}

	/// Removes consecutive elements that map to the same key. The first element is always kept
	pub fn dedup_by_key<K, F>(&mut self, key: F) -> &mut Self
	where
		F: FnMut(&mut T) -> K,
		K: PartialEq,
	{
		self.0.dedup_by_key(key);
		self
	}

	/// Returns a copy of the elements in `range`, which is clamped to the bounds of the vector.
	///
	/// # Errors
	/// If `range` is empty
	pub fn slice<R>(&self, range: R) -> Result<Self, EmptyConstructionError>
	where
		R: RangeBounds<usize>,
		T: Clone,
	{
		let range = clamp_range(&range, self.0.len());
		Self::from_vec(self.0[range].to_vec())
	}

	/// Returns a copy of self with all items of `other` appended
	#[must_use]
	pub fn concat<I>(&self, other: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Clone,
	{
		let mut vec = self.0.clone();
		vec.extend(other);

		Self(vec)
	}

	/// Returns a copy of the elements `f` returns `true` for.
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

	/// Returns a new [`NonEmptySeq`] with `f` applied to every element
	pub fn map<U, F>(&self, f: F) -> NonEmptySeq<U>
	where
		F: FnMut(&T) -> U,
	{
		NonEmptySeq(self.0.iter().map(f).collect())
	}

	/// Consumes self and returns a new [`NonEmptySeq`] with `f` applied to every element
	pub fn into_map<U, F>(self, f: F) -> NonEmptySeq<U>
	where
		F: FnMut(T) -> U,
	{
		NonEmptySeq(self.0.into_iter().map(f).collect())
	}

	/// Returns a new [`NonEmptySeq`] with all items of the iterables `f` returns for each element.
	///
	/// # Errors
	/// If all iterables `f` returned were empty
	pub fn flat_map<U, I, F>(&self, f: F) -> Result<NonEmptySeq<U>, EmptyConstructionError>
	where
		I: IntoIterator<Item = U>,
		F: FnMut(&T) -> I,
	{
		NonEmptySeq::from_iterable(self.0.iter().flat_map(f))
	}

	/// Returns a copy of self with the elements in `range` overwritten with clones of `value`.
	///
	/// `range` is clamped to the bounds of the vector.
	/// To fill a range in place instead, fill the subslice: `seq[range].fill(value)`.
	#[must_use]
	pub fn filled<R>(&self, range: R, value: T) -> Self
	where
		R: RangeBounds<usize>,
		T: Clone,
	{
		let range = clamp_range(&range, self.0.len());
		let mut vec = self.0.clone();
		vec[range].fill(value);

		Self(vec)
	}

	/// Returns a copy of self rotated to the left by `mid % len` elements
	#[must_use]
	pub fn rotated_left(&self, mid: usize) -> Self
	where
		T: Clone,
	{
		let mut copy = self.clone();
		copy.rotate_left(mid);
		copy
	}

	/// Returns a copy of self rotated to the right by `k % len` elements
	#[must_use]
	pub fn rotated_right(&self, k: usize) -> Self
	where
		T: Clone,
	{
		let mut copy = self.clone();
		copy.rotate_right(k);
		copy
	}
}

/// Turns `range` into concrete indices within `0..len`, the same way array splice clamps its arguments
fn clamp_range<R>(range: &R, len: usize) -> Range<usize>
where
	R: RangeBounds<usize>,
{
	let start = match range.start_bound() {
		Bound::Included(&start) => start,
		Bound::Excluded(&start) => start.saturating_add(1),
		Bound::Unbounded => 0,
	};

	let end = match range.end_bound() {
		Bound::Included(&end) => end.saturating_add(1),
		Bound::Excluded(&end) => end,
		Bound::Unbounded => len,
	};

	let start = start.min(len);
	let end = end.clamp(start, len);

	start..end
}

fn reject(operation: &str) -> WouldBecomeEmptyError {
	tracing::debug!("Rejected {operation} that would have left the {KIND} empty");
	WouldBecomeEmptyError::new(KIND)
}

impl<T> sealed::Sealed for NonEmptySeq<T> {}

impl<T> NonEmpty for NonEmptySeq<T> {
	type Base = Vec<T>;

	const KIND: CollectionKind = KIND;

	fn len_nonzero(&self) -> NonZeroUsize {
		NonEmptySeq::len_nonzero(self)
	}

	fn as_base(&self) -> &Self::Base {
		&self.0
	}

	fn into_base(self) -> Self::Base {
		self.0
	}
}

impl<T> Deref for NonEmptySeq<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

// can't change the length of the slice
impl<T> DerefMut for NonEmptySeq<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl<T> AsRef<[T]> for NonEmptySeq<T> {
	fn as_ref(&self) -> &[T] {
		&self.0
	}
}

impl<T> AsRef<Vec<T>> for NonEmptySeq<T> {
	fn as_ref(&self) -> &Vec<T> {
		&self.0
	}
}

impl<T> AsMut<[T]> for NonEmptySeq<T> {
	fn as_mut(&mut self) -> &mut [T] {
		&mut self.0
	}
}

impl<T> Borrow<[T]> for NonEmptySeq<T> {
	fn borrow(&self) -> &[T] {
		&self.0
	}
}

impl<T> BorrowMut<[T]> for NonEmptySeq<T> {
	fn borrow_mut(&mut self) -> &mut [T] {
		&mut self.0
	}
}

impl<T> Extend<T> for NonEmptySeq<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for NonEmptySeq<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<T> IntoIterator for NonEmptySeq<T> {
	type Item = T;
	type IntoIter = vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a NonEmptySeq<T> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut NonEmptySeq<T> {
	type Item = &'a mut T;
	type IntoIter = slice::IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter_mut()
	}
}

impl<T> From<NonEmptySeq<T>> for Vec<T> {
	fn from(seq: NonEmptySeq<T>) -> Self {
		seq.0
	}
}

impl<T> TryFrom<Vec<T>> for NonEmptySeq<T> {
	type Error = EmptyConstructionError;

	fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
		Self::from_vec(vec)
	}
}

impl<T: Clone> TryFrom<&[T]> for NonEmptySeq<T> {
	type Error = EmptyConstructionError;

	fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
		Self::from_vec(slice.to_vec())
	}
}

impl<T, U> PartialEq<Vec<U>> for NonEmptySeq<T>
where
	T: PartialEq<U>,
{
	fn eq(&self, other: &Vec<U>) -> bool {
		self.0 == *other
	}
}

impl<T, U> PartialEq<[U]> for NonEmptySeq<T>
where
	T: PartialEq<U>,
{
	fn eq(&self, other: &[U]) -> bool {
		self.0 == other
	}
}

impl<T, U, const N: usize> PartialEq<[U; N]> for NonEmptySeq<T>
where
	T: PartialEq<U>,
{
	fn eq(&self, other: &[U; N]) -> bool {
		self.0 == other
	}
}

impl<T, U> PartialEq<NonEmptySeq<U>> for Vec<T>
where
	T: PartialEq<U>,
{
	fn eq(&self, other: &NonEmptySeq<U>) -> bool {
		*self == other.0
	}
}

/// Formats as `NonEmptySeq[a,b,c]`
impl<T: Display> Display for NonEmptySeq<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{KIND}[{}]", self.0.iter().format(","))
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	fn seq() -> NonEmptySeq<i32> {
		NonEmptySeq::create([1, 2, 3, 4]).unwrap()
	}

	#[test]
	fn create_keeps_order() {
		assert_eq!(seq().as_vec(), &vec![1, 2, 3, 4]);
	}

	#[test]
	fn create_empty() {
		let err = NonEmptySeq::<i32>::create([]).unwrap_err();
		assert_eq!(err.kind, CollectionKind::Sequence);
	}

	#[test]
	fn from_iterable() {
		let seq = NonEmptySeq::from_iterable("qwerty".chars()).unwrap();
		assert_eq!(seq, ['q', 'w', 'e', 'r', 't', 'y']);

		assert_matches!(
			NonEmptySeq::from_iterable(Vec::<i32>::new()),
			Err(EmptyConstructionError {
				kind: CollectionKind::Sequence
			})
		);
	}

	#[test]
	fn from_head_and_tail() {
		assert_eq!(NonEmptySeq::from_head_and_tail(1, [2, 3]), [1, 2, 3]);
		assert_eq!(NonEmptySeq::from_head_and_tail(1, []), [1]);
	}

	#[test]
	fn push_and_pop() {
		let mut seq = NonEmptySeq::new(1);
		seq.push(2);
		seq.push(3);
		assert_eq!(seq.len(), 3);
		assert_eq!(seq.pop(), Ok(3));
		assert_eq!(seq.pop(), Ok(2));
		assert_matches!(seq.pop(), Err(WouldBecomeEmptyError { .. }));
		assert_eq!(seq, [1]);
	}

	#[test]
	fn remove() {
		let mut seq = NonEmptySeq::create([1, 2, 3]).unwrap();
		assert_eq!(seq.remove(1), Ok(2));
		assert_eq!(seq.as_vec(), &vec![1, 3]);
		assert_eq!(seq.remove(0), Ok(1));
		assert_matches!(seq.remove(0), Err(_));
		assert_eq!(seq, [3]);
	}

	#[test]
	fn swap_remove() {
		let mut seq = seq();
		assert_eq!(seq.swap_remove(0), Ok(1));
		assert_eq!(seq, [4, 2, 3]);

		let mut one = NonEmptySeq::new(1);
		assert_matches!(one.swap_remove(0), Err(_));
		assert_eq!(one, [1]);
	}

	#[test]
	fn split_off() {
		let mut seq = seq();
		assert_matches!(seq.split_off(0), Err(_));
		assert_eq!(seq, [1, 2, 3, 4]);

		assert_eq!(seq.split_off(4), Ok(vec![]));
		assert_eq!(seq.split_off(1), Ok(vec![2, 3, 4]));
		assert_eq!(seq, [1]);
	}

	#[test]
	fn clear_is_always_rejected() {
		let mut seq = seq();
		assert_matches!(seq.clear(), Err(_));
		assert_eq!(seq, [1, 2, 3, 4]);

		let mut one = NonEmptySeq::new(1);
		assert_matches!(one.clear(), Err(_));
		assert_eq!(one, [1]);
	}

	#[test]
	fn retain_mut() {
		let mut seq = seq();
		seq.retain_mut(|x| {
			*x *= 10;
			*x > 15
		})
		.unwrap();
		assert_eq!(seq, [20, 30, 40]);

		assert_matches!(
			seq.retain_mut(|x| {
				*x = 0;
				false
			}),
			Err(_)
		);
		assert_eq!(seq, [20, 30, 40]);
	}

	#[test]
	fn dedup_by() {
		let mut seq = NonEmptySeq::create(["a", "A", "b", "B", "b"]).unwrap();
		seq.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
		assert_eq!(seq, ["a", "b"]);
	}

	#[test]
	fn capacity_passthrough() {
		let mut seq = NonEmptySeq::new(1);
		seq.reserve(10);
		assert!(seq.capacity() >= 11);

		seq.extend_from_slice(&[2, 3]);
		seq.shrink_to_fit();
		assert_eq!(seq, [1, 2, 3]);
		assert!(seq.capacity() >= 3);
	}

	#[test]
	fn first_last() {
		let mut seq = NonEmptySeq::create([1, 2, 3]).unwrap();
		assert_eq!(seq.first(), &1);
		assert_eq!(seq.last(), &3);
		*seq.first_mut() = 10;
		*seq.last_mut() = 30;
		assert_eq!(seq.as_vec(), &vec![10, 2, 30]);
	}

	#[test]
	fn clear_except_first() {
		let mut seq = seq();
		seq.clear_except_first();
		assert_eq!(seq.as_vec(), &vec![1]);
	}

	#[test]
	fn splice_everything_is_rejected() {
		let mut seq = seq();
		assert_matches!(seq.splice(0..4, []), Err(_));
		assert_eq!(seq, [1, 2, 3, 4]);
	}

	#[test]
	fn splice_everything_with_replacement() {
		let mut seq = seq();
		assert_eq!(seq.splice(.., [9]), Ok(vec![1, 2, 3, 4]));
		assert_eq!(seq, [9]);
	}

	#[test]
	fn splice_insert_only() {
		let mut seq = seq();
		assert_eq!(seq.splice(2..2, [10]), Ok(vec![]));
		assert_eq!(seq, [1, 2, 10, 3, 4]);
	}

	#[test]
	fn splice_clamps_out_of_bounds() {
		let mut seq = seq();
		assert_eq!(seq.splice(2..100, []), Ok(vec![3, 4]));
		assert_eq!(seq, [1, 2]);

		// an inverted range removes nothing, like an array splice with a zero delete count
		let start = 5;
		let removed = seq.splice(start..1, [7]);
		assert_eq!(removed, Ok(vec![]));
		assert_eq!(seq, [1, 2, 7]);

		assert_matches!(seq.splice(0..usize::MAX, []), Err(_));
		assert_eq!(seq, [1, 2, 7]);
	}

	#[test]
	fn drain() {
		let mut seq = seq();
		assert_eq!(seq.drain(0..2), Ok(vec![1, 2]));
		assert_eq!(seq, [3, 4]);

		assert_matches!(seq.drain(..), Err(_));
		assert_matches!(seq.drain(0..=1), Err(_));
		assert_eq!(seq, [3, 4]);

		assert_eq!(seq.drain(1..), Ok(vec![4]));
		assert_eq!(seq, [3]);
	}

	#[test]
	fn truncate_and_resize() {
		let mut seq = seq();
		seq.truncate(3).unwrap();
		assert_eq!(seq.len(), 3);
		assert_matches!(seq.truncate(0), Err(_));
		assert_eq!(seq, [1, 2, 3]);

		seq.truncate(10).unwrap();
		assert_eq!(seq, [1, 2, 3]);

		seq.resize(5, 0).unwrap();
		assert_eq!(seq, [1, 2, 3, 0, 0]);
		assert_matches!(seq.resize(0, 0), Err(_));
		assert_matches!(seq.resize_with(0, || 0), Err(_));
		assert_eq!(seq.len(), 5);

		let mut next = 5;
		seq.resize_with(7, || {
			next += 1;
			next
		})
		.unwrap();
		assert_eq!(seq, [1, 2, 3, 0, 0, 6, 7]);

		seq.resize_with(2, || 0).unwrap();
		assert_eq!(seq, [1, 2]);
	}

	#[test]
	fn retain() {
		let mut seq = seq();
		seq.retain(|x| x % 2 == 0).unwrap();
		assert_eq!(seq, [2, 4]);

		assert_matches!(seq.retain(|x| *x > 10), Err(_));
		assert_eq!(seq, [2, 4]);
	}

	#[test]
	fn retain_calls_predicate_once_per_element() {
		let mut seq = seq();
		let mut calls = 0;
		seq.retain(|_| {
			calls += 1;
			calls % 2 == 1
		})
		.unwrap();

		assert_eq!(calls, 4);
		assert_eq!(seq, [1, 3]);
	}

	#[test]
	fn reverse_returns_same_instance() {
		let mut seq = seq();
		let ptr: *const NonEmptySeq<i32> = &seq;

		let reversed = seq.reverse();
		assert!(std::ptr::eq(reversed, ptr));
		assert_eq!(seq, [4, 3, 2, 1]);
	}

	#[test]
	fn in_place_ops_match_vec() {
		let mut vec = vec![1, 4, 3, 2];
		let mut seq = NonEmptySeq::create([1, 4, 3, 2]).unwrap();

		vec.sort();
		seq.sort();
		assert_eq!(seq, vec);

		vec.sort_by(|a, b| b.cmp(a));
		seq.sort_by(|a, b| b.cmp(a));
		assert_eq!(seq, vec);

		vec.copy_within(0..2, 2);
		seq.copy_within(0..2, 2);
		assert_eq!(seq, vec);

		vec.fill(10);
		seq.fill(10).dedup();
		assert_eq!(seq, [10]);
	}

	#[test]
	fn rotations() {
		let mut seq = seq();
		seq.rotate_left(1);
		assert_eq!(seq, [2, 3, 4, 1]);
		seq.rotate_right(5);
		assert_eq!(seq, [1, 2, 3, 4]);

		assert_eq!(seq.rotated_left(6), [3, 4, 1, 2]);
		assert_eq!(seq.rotated_right(1), [4, 1, 2, 3]);
		assert_eq!(seq, [1, 2, 3, 4]);
	}

	#[test]
	fn index_read_and_write() {
		let mut seq = seq();
		assert_eq!(seq[3], 4);
		seq[3] = 12;
		assert_eq!(seq, [1, 2, 3, 12]);
	}

	#[test]
	fn slice() {
		let seq = seq();
		assert_eq!(seq.slice(1..3), Ok(NonEmptySeq::create([2, 3]).unwrap()));
		assert_eq!(seq.slice(2..), Ok(NonEmptySeq::create([3, 4]).unwrap()));
		assert_matches!(seq.slice(2..2), Err(_));
		assert_matches!(seq.slice(10..), Err(_));
	}

	#[test]
	fn concat() {
		let seq = seq();
		assert_eq!(seq.concat([5]), [1, 2, 3, 4, 5]);
		assert_eq!(seq.concat(vec![5, 6, 7]), [1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(
			seq.concat(NonEmptySeq::create([5, 6, 7]).unwrap()),
			[1, 2, 3, 4, 5, 6, 7]
		);
		assert_eq!(seq, [1, 2, 3, 4]);
	}

	#[test]
	fn filter() {
		let seq = seq();
		assert_eq!(seq.filter(|x| *x < 4), Ok(NonEmptySeq::create([1, 2, 3]).unwrap()));
		assert_matches!(seq.filter(|x| *x > 10), Err(EmptyConstructionError { .. }));
	}

	#[test]
	fn map_and_flat_map() {
		let seq = seq();
		assert_eq!(seq.map(|x| x * 2), [2, 4, 6, 8]);
		assert_eq!(seq.clone().into_map(|x| x.to_string()), ["1", "2", "3", "4"]);

		assert_eq!(
			seq.flat_map(|x| std::iter::repeat_n(*x, usize::from(*x % 2 == 1))),
			Ok(NonEmptySeq::create([1, 3]).unwrap())
		);
		assert_matches!(seq.flat_map(|_| Vec::<i32>::new()), Err(_));
	}

	#[test]
	fn filled() {
		let seq = seq();
		assert_eq!(seq.filled(1..3, 0), [1, 0, 0, 4]);
		assert_eq!(seq.filled(2.., 9), [1, 2, 9, 9]);
		assert_eq!(seq, [1, 2, 3, 4]);
	}

	#[test]
	fn range_fill_in_place() {
		let mut seq = seq();
		seq[1..3].fill(0);
		assert_eq!(seq, [1, 0, 0, 4]);
	}

	#[test]
	fn passthrough_searches() {
		let vec = vec![1, 2, 3, 4];
		let seq = seq();

		assert_eq!(seq.iter().find(|x| **x > 1), vec.iter().find(|x| **x > 1));
		assert_eq!(seq.iter().position(|x| *x == 3), Some(2));
		assert!(seq.iter().all(|x| *x < 5));
		assert!(!seq.iter().all(|x| *x > 1));
		assert!(seq.contains(&4));
		assert_eq!(seq.binary_search(&3), Ok(2));
	}

	#[test]
	fn display() {
		assert_eq!(seq().to_string(), "NonEmptySeq[1,2,3,4]");
		assert_eq!(NonEmptySeq::new("a").to_string(), "NonEmptySeq[a]");
	}

	#[test]
	fn conversions() {
		let vec: Vec<i32> = seq().into();
		assert_eq!(vec, [1, 2, 3, 4]);
		assert_eq!(vec, seq());

		assert_matches!(NonEmptySeq::try_from(Vec::<i32>::new()), Err(_));
		assert_eq!(NonEmptySeq::try_from(&[1, 2][..]), Ok(NonEmptySeq::create([1, 2]).unwrap()));
	}

	#[test]
	fn extend() {
		let mut seq = NonEmptySeq::new(1);
		seq.extend([2, 3]);
		seq.extend(&[4]);
		seq.append(&mut vec![5]);
		seq.insert(0, 0);
		assert_eq!(seq, [0, 1, 2, 3, 4, 5]);
	}
}
