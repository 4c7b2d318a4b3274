//! A double-ended queue implemented with a growable, recentering buffer.
//!
//! This queue has amortized O(1) inserts and removals from both ends of the
//! sequence. It also has O(1) indexing like a vector, and since its elements
//! are always contiguous, it can be viewed as a single slice.

use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::ops::{Index, IndexMut};
use core::{mem, slice};

use crate::cursor::Cursor;
use crate::OutOfRange;

/// A double-ended queue backed by a single contiguous buffer.
///
/// The live elements occupy the slots `left..right` of the buffer; all other
/// slots hold `T::default()`. Pushing to an end that has run out of room
/// doubles the buffer and moves the live range so that both ends have
/// roughly the same amount of headroom again.
///
/// Removing an element always puts `T::default()` back into its slot, so the
/// removed value is handed to the caller (or dropped) immediately.
///
/// Besides the usual index-based access, positions can be held as
/// [`Cursor`]s; see [`begin`](Deque::begin) and [`begin_mut`](Deque::begin_mut).
pub struct Deque<T> {
    buf: Vec<T>,
    left: usize,
    right: usize,
    front_shift: isize,
}

impl<T> Deque<T> {
    /// Constructs a new, empty deque without allocating.
    ///
    /// # Examples
    /// ```
    /// let deque = shift_deque::Deque::<u32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Deque {
            buf: Vec::new(),
            left: 0,
            right: 0,
            front_shift: 0,
        }
    }

    /// Constructs a deque holding `length` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// let deque = shift_deque::Deque::from_elem(3, 'x');
    /// assert_eq!(deque, ['x', 'x', 'x']);
    /// ```
    pub fn from_elem(length: usize, value: T) -> Self
    where
        T: Clone,
    {
        Deque {
            buf: alloc::vec![value; length],
            left: 0,
            right: length,
            front_shift: 0,
        }
    }

    /// Returns the number of slots in the backing buffer, counting both the
    /// live range and the empty slots on either side of it.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Returns the number of elements pushed to the front minus the number of
    /// elements popped from the front over the lifetime of the deque.
    ///
    /// Cursors use this counter to stay on the same element when the front
    /// of the deque changes.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_back(3);
    /// deque.pop_front();
    /// assert_eq!(deque.front_shift(), 1);
    /// ```
    #[inline]
    pub fn front_shift(&self) -> isize {
        self.front_shift
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Returns the live elements as a single slice, front to back.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[self.left..self.right]
    }

    /// Returns the live elements as a single mutable slice, front to back.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[self.left..self.right]
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at the given index, without doing
    /// bounds checking.
    ///
    /// # Safety
    /// Calling this method with an index greater than or equal to
    /// [`len`](Deque::len) is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        self.buf.get_unchecked(self.left + index)
    }

    /// Returns a mutable reference to the element at the given index, without
    /// doing bounds checking.
    ///
    /// # Safety
    /// Calling this method with an index greater than or equal to
    /// [`len`](Deque::len) is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        self.buf.get_unchecked_mut(self.left + index)
    }

    /// Returns a reference to the element at the given index, or
    /// [`OutOfRange`] if the index is not less than the length.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_back(10);
    /// deque.push_back(20);
    /// assert_eq!(deque.at(1), Ok(&20));
    ///
    /// let err = deque.at(2).unwrap_err();
    /// assert_eq!((err.index(), err.deque_len()), (2, 2));
    /// ```
    pub fn at(&self, index: usize) -> crate::Result<&T> {
        match self.get(index) {
            Some(element) => Ok(element),
            None => OutOfRange::new(index, self.len()),
        }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`OutOfRange`] if the index is not less than the length.
    pub fn at_mut(&mut self, index: usize) -> crate::Result<&mut T> {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => Ok(element),
            None => OutOfRange::new(index, len),
        }
    }

    /// Returns a reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Swaps the elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        let len = self.len();
        if i >= len || j >= len {
            panic!("index out of bounds in `swap`");
        }
        self.buf.swap(self.left + i, self.left + j);
    }

    /// Returns a cursor pointing at the front element.
    ///
    /// # Examples
    /// ```
    /// let deque: shift_deque::Deque<_> = (1..=3).collect();
    /// let cursor = deque.begin();
    /// assert_eq!(cursor.get(), Some(&1));
    /// assert_eq!(deque.end() - cursor, 3);
    /// ```
    #[inline]
    pub fn begin(&self) -> Cursor<&Self> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor pointing one past the back element.
    #[inline]
    pub fn end(&self) -> Cursor<&Self> {
        let len = self.len() as isize;
        Cursor::new(self, len)
    }

    /// Returns a cursor pointing at the element at `index`.
    ///
    /// The index is not checked; a cursor may point outside the deque, in
    /// which case [`Cursor::get`] returns [`None`]. Indices above
    /// `isize::MAX` saturate to that position.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<&Self> {
        Cursor::new(self, saturating_position(index))
    }

    /// Returns a mutable cursor pointing at the front element.
    #[inline]
    pub fn begin_mut(&mut self) -> Cursor<&mut Self> {
        Cursor::new(self, 0)
    }

    /// Returns a mutable cursor pointing one past the back element.
    #[inline]
    pub fn end_mut(&mut self) -> Cursor<&mut Self> {
        let len = self.len() as isize;
        Cursor::new(self, len)
    }

    /// Returns a mutable cursor pointing at the element at `index`.
    #[inline]
    pub fn cursor_mut(&mut self, index: usize) -> Cursor<&mut Self> {
        Cursor::new(self, saturating_position(index))
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut_slice().iter_mut(),
        }
    }
}

#[inline(always)]
fn saturating_position(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

impl<T: Default> Deque<T> {
    /// Constructs a deque holding `length` default values.
    ///
    /// # Examples
    /// ```
    /// let deque = shift_deque::Deque::<i32>::with_len(4);
    /// assert_eq!(deque, [0, 0, 0, 0]);
    /// ```
    pub fn with_len(length: usize) -> Self {
        let mut buf = Vec::with_capacity(length);
        buf.resize_with(length, T::default);
        Deque {
            buf,
            left: 0,
            right: length,
            front_shift: 0,
        }
    }

    /// Doubles the buffer and moves the live range up so that both ends have
    /// headroom.
    fn grow(&mut self) {
        let old_capacity = self.buf.len();
        let shift = old_capacity - self.right + self.left / 2 + 1;
        let new_capacity = (old_capacity + 1) * 2;
        log::trace!(
            "growing deque buffer from {} to {} slots, shifting {} elements by {}",
            old_capacity,
            new_capacity,
            self.len(),
            shift
        );

        self.buf.resize_with(new_capacity, T::default);

        // highest index first: every destination slot has already been vacated
        for i in (self.left..self.right).rev() {
            self.buf.swap(i, i + shift);
        }

        self.left += shift;
        self.right += shift;
    }

    /// Appends an element to the back of the `Deque`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.right + 1 >= self.buf.len() {
            self.grow();
        }

        self.buf[self.right] = value;
        self.right += 1;
    }

    /// Prepends an element to the front of the `Deque`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque, [2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.left == 0 {
            self.grow();
        }

        self.left -= 1;
        self.buf[self.left] = value;
        self.front_shift += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.right -= 1;
        Some(mem::take(&mut self.buf[self.right]))
    }

    /// Removes the first element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = shift_deque::Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let result = mem::take(&mut self.buf[self.left]);
        self.left += 1;
        self.front_shift -= 1;
        Some(result)
    }

    /// Inserts an element at `index` within the `Deque`, shifting all
    /// elements after it towards the back.
    ///
    /// The element is appended and then swapped backward one slot at a time,
    /// so this is O(`len - index`).
    ///
    /// # Panics
    /// Panics if `index` is greater than the deque's length.
    ///
    /// # Examples
    /// ```
    /// let mut deque: shift_deque::Deque<_> = ['a', 'b', 'c'].into();
    /// deque.insert(1, 'd');
    /// assert_eq!(deque, ['a', 'd', 'b', 'c']);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("index out of bounds in `insert`");
        }

        self.push_back(value);
        let live = self.as_mut_slice();
        for i in (index + 1..live.len()).rev() {
            live.swap(i, i - 1);
        }
    }

    /// Removes and returns the element at `index`, shifting all elements after
    /// it towards the front, or returns [`None`] if `index` is out of bounds.
    ///
    /// The element is swapped forward to the back and then popped, so this is
    /// O(`len - index`).
    ///
    /// # Examples
    /// ```
    /// let mut deque: shift_deque::Deque<_> = [1, 2, 3].into();
    /// assert_eq!(deque.erase(1), Some(2));
    /// assert_eq!(deque, [1, 3]);
    /// assert_eq!(deque.erase(2), None);
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        let live = self.as_mut_slice();
        for i in index..live.len() - 1 {
            live.swap(i, i + 1);
        }
        self.pop_back()
    }

    /// Clears the `Deque`, dropping all values.
    ///
    /// The buffer is kept, and since the elements are removed from the back,
    /// [`front_shift`](Deque::front_shift) is left unchanged.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        Deque::from(self.as_slice().to_vec())
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    /// Converts a vector into a deque without reallocating.
    fn from(vec: Vec<T>) -> Self {
        let right = vec.len();
        Deque {
            buf: vec,
            left: 0,
            right,
            front_shift: 0,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(array: [T; N]) -> Self {
        Deque::from(Vec::from(array))
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).expect("out of bounds access")
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("out of bounds access")
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<A: PartialEq<B>, B> PartialEq<Deque<B>> for Deque<A> {
    fn eq(&self, other: &Deque<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for Deque<T> {
    fn eq(&self, other: &R) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Default> Extend<T> for Deque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone + Default> Extend<&'a T> for Deque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter()
            .for_each(|item| self.push_back(item.clone()));
    }
}

impl<T: Default> FromIterator<T> for Deque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut result = Deque::new();
        result.extend(iter);
        result
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](Deque::iter) method on [`Deque`].
/// See its documentation for more.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the elements of a deque that returns mutable references.
///
/// This `struct` is created by the [`iter_mut`](Deque::iter_mut) method on
/// [`Deque`]. See its documentation for more.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.inner).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the [`into_iter`](Deque::into_iter) method on
/// [`Deque`] (provided by the [`IntoIterator`] trait). See its documentation
/// for more.
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque and creates an iterator over its elements,
    /// dropping the empty slots of the buffer.
    fn into_iter(self) -> IntoIter<T> {
        let Deque {
            mut buf, left, right, ..
        } = self;
        buf.truncate(right);
        buf.drain(..left);
        IntoIter {
            inner: buf.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
