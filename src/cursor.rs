//! Random-access cursors into a [`Deque`].
//!
//! A [`Cursor`] is a position in a deque, much like an iterator in C++: it can
//! be moved by any amount in either direction, compared with other cursors,
//! and dereferenced with [`get`](Cursor::get). The same type serves both
//! access modes; `Cursor<&Deque<T>>` is a read-only cursor that can be copied
//! freely, while `Cursor<&mut Deque<T>>` additionally grants mutable access to
//! the element and to the deque itself.
//!
//! Each cursor records the deque's [`front_shift`](Deque::front_shift) at the
//! time it was created. When dereferenced, the difference between the current
//! front shift and the recorded one is added to the cursor's position, so a
//! cursor keeps referring to the same element even after elements have been
//! pushed to or popped from the front:
//!
//! ```
//! use shift_deque::Deque;
//!
//! let mut deque: Deque<_> = ['b', 'c', 'd'].into();
//! let mut cursor = deque.cursor_mut(1);
//! assert_eq!(cursor.get(), Some(&'c'));
//!
//! cursor.deque_mut().push_front('a');
//! cursor.deque_mut().pop_front();
//! cursor.deque_mut().pop_front();
//! assert_eq!(cursor.get(), Some(&'c'));
//! assert_eq!(cursor.index(), 0);
//! ```
//!
//! Subtracting one cursor from another (`a - b`) is only available for
//! read-only cursors, since two exclusive cursors into the same deque cannot
//! coexist. An exclusive cursor can measure its distance to a read-only one
//! with [`distance`](Cursor::distance), e.g. against [`as_cursor`](Cursor::as_cursor).
//!
//! This correction only covers the front of the deque. Inserting or erasing
//! elements in the middle moves elements under a cursor like it would for
//! any other sequence.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Deque;

mod sealed {
    pub trait Sealed {}
}

/// A reference to a [`Deque`], either shared or exclusive.
///
/// This trait is sealed; it is implemented for `&Deque<T>` and
/// `&mut Deque<T>` only.
pub trait DequeRef: sealed::Sealed {
    /// The element type of the referenced deque.
    type Item;

    /// Reborrows the referenced deque immutably.
    fn deque(&self) -> &Deque<Self::Item>;
}

impl<T> sealed::Sealed for &Deque<T> {}
impl<T> sealed::Sealed for &mut Deque<T> {}

impl<T> DequeRef for &Deque<T> {
    type Item = T;

    #[inline(always)]
    fn deque(&self) -> &Deque<T> {
        self
    }
}

impl<T> DequeRef for &mut Deque<T> {
    type Item = T;

    #[inline(always)]
    fn deque(&self) -> &Deque<T> {
        self
    }
}

/// A random-access position in a [`Deque`].
///
/// Created by [`Deque::begin`], [`Deque::end`], [`Deque::cursor`] and their
/// `_mut` counterparts. See the [module-level documentation](crate::cursor)
/// for more.
///
/// Cursors compare by the position they had when created, relative to the
/// front shift at that time. Cursors into different deques are never equal,
/// and [`partial_cmp`](PartialOrd::partial_cmp) returns [`None`] for them;
/// the relational operators are only meaningful for cursors into the same
/// deque.
#[derive(Clone, Copy)]
pub struct Cursor<R> {
    deque: R,
    position: isize,
    offset: isize,
}

impl<R: DequeRef> Cursor<R> {
    #[inline]
    pub(crate) fn new(deque: R, position: isize) -> Self {
        let offset = deque.deque().front_shift();
        Cursor {
            deque,
            position,
            offset,
        }
    }

    /// Returns the position this cursor was created at, plus any movement
    /// applied to it since.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Returns the deque's front shift at the time this cursor was created.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the index of the element this cursor currently refers to.
    ///
    /// This is the cursor's position corrected by the number of elements
    /// pushed to the front (minus those popped from it) since the cursor was
    /// created. It may be negative or past the end.
    #[inline]
    pub fn index(&self) -> isize {
        self.position + self.deque.deque().front_shift() - self.offset
    }

    #[inline]
    fn live_index(&self) -> Option<usize> {
        let index = self.index();
        if index >= 0 && (index as usize) < self.deque.deque().len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Returns a reference to the element this cursor refers to, or [`None`]
    /// if it points outside the deque.
    #[inline]
    pub fn get(&self) -> Option<&R::Item> {
        let index = self.live_index()?;
        self.deque.deque().get(index)
    }

    /// Moves the cursor one element towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.position += 1;
    }

    /// Moves the cursor one element towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.position -= 1;
    }

    /// Returns `self.position() - other.position()`.
    ///
    /// The front shift recorded by either cursor is ignored, so this is only
    /// the distance between the two elements if both cursors were created
    /// with the same front shift.
    #[inline]
    pub fn distance<S: DequeRef<Item = R::Item>>(&self, other: &Cursor<S>) -> isize {
        self.position - other.position
    }

    #[inline(always)]
    fn key(&self) -> isize {
        self.position - self.offset
    }

    #[inline(always)]
    fn same_deque<S: DequeRef<Item = R::Item>>(&self, other: &Cursor<S>) -> bool {
        core::ptr::eq(self.deque.deque(), other.deque.deque())
    }
}

/// Exclusive cursors do not implement `Sub<Cursor>`; use
/// [`distance`](Cursor::distance) to compare positions.
impl<'a, T> Cursor<&'a mut Deque<T>> {
    /// Returns a mutable reference to the element this cursor refers to, or
    /// [`None`] if it points outside the deque.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.live_index()?;
        self.deque.get_mut(index)
    }

    /// Returns the deque this cursor points into.
    ///
    /// Pushing to and popping from the front of the deque through this
    /// reference does not change which element the cursor refers to.
    #[inline]
    pub fn deque_mut(&mut self) -> &mut Deque<T> {
        &mut *self.deque
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<&Deque<T>> {
        Cursor {
            deque: &*self.deque,
            position: self.position,
            offset: self.offset,
        }
    }

    /// Converts this cursor into a read-only cursor at the same position.
    #[inline]
    pub fn into_cursor(self) -> Cursor<&'a Deque<T>> {
        Cursor {
            deque: self.deque,
            position: self.position,
            offset: self.offset,
        }
    }
}

impl<'a, T: Default> Cursor<&'a mut Deque<T>> {
    /// Inserts an element at this cursor's index, shifting the element it
    /// referred to (and all after it) towards the back.
    ///
    /// Afterwards the cursor refers to the inserted element.
    ///
    /// # Panics
    /// Panics if the cursor's index is negative or greater than the deque's
    /// length. A cursor returned by [`Deque::end_mut`] is a valid insertion
    /// point.
    ///
    /// # Examples
    /// ```
    /// let mut deque: shift_deque::Deque<_> = [0, 2].into();
    /// let mut cursor = deque.begin_mut() + 1;
    /// cursor.insert(1);
    /// assert_eq!(cursor.get(), Some(&1));
    /// assert_eq!(deque, [0, 1, 2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let index = self.index();
        if index < 0 {
            panic!("index out of bounds in `insert`");
        }
        self.deque.insert(index as usize, value);
    }

    /// Removes and returns the element this cursor refers to, shifting all
    /// elements after it towards the front, or returns [`None`] if the cursor
    /// points outside the deque.
    ///
    /// Afterwards the cursor refers to the element that followed the removed
    /// one.
    ///
    /// # Examples
    /// ```
    /// let mut deque: shift_deque::Deque<_> = [0, 1, 2].into();
    /// let mut cursor = deque.begin_mut() + 1;
    /// assert_eq!(cursor.erase(), Some(1));
    /// assert_eq!(cursor.get(), Some(&2));
    /// assert_eq!(deque, [0, 2]);
    /// ```
    pub fn erase(&mut self) -> Option<T> {
        let index = self.live_index()?;
        self.deque.erase(index)
    }
}

impl<R: DequeRef> Debug for Cursor<R>
where
    R::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("offset", &self.offset)
            .field("element", &self.get())
            .finish()
    }
}

impl<R: DequeRef> AddAssign<isize> for Cursor<R> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.position += n;
    }
}

impl<R: DequeRef> SubAssign<isize> for Cursor<R> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.position -= n;
    }
}

impl<R: DequeRef> Add<isize> for Cursor<R> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<R: DequeRef> Sub<isize> for Cursor<R> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'a, 'b, T> Sub<Cursor<&'b Deque<T>>> for Cursor<&'a Deque<T>> {
    type Output = isize;

    /// See [`Cursor::distance`].
    #[inline]
    fn sub(self, other: Cursor<&'b Deque<T>>) -> isize {
        self.distance(&other)
    }
}

impl<R, S> PartialEq<Cursor<S>> for Cursor<R>
where
    R: DequeRef,
    S: DequeRef<Item = R::Item>,
{
    fn eq(&self, other: &Cursor<S>) -> bool {
        self.same_deque(other) && self.key() == other.key()
    }
}

impl<R: DequeRef> Eq for Cursor<R> {}

impl<R, S> PartialOrd<Cursor<S>> for Cursor<R>
where
    R: DequeRef,
    S: DequeRef<Item = R::Item>,
{
    fn partial_cmp(&self, other: &Cursor<S>) -> Option<Ordering> {
        if !self.same_deque(other) {
            return None;
        }

        Some(self.key().cmp(&other.key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_end_span_the_deque() {
        let mut deque = Deque::new();
        for i in 0..5 {
            deque.push_back(i);
        }
        deque.push_front(-1);

        let begin = deque.begin();
        let end = deque.end();
        assert_eq!(end - begin, 6);
        assert_eq!(begin.offset(), 1);
        assert_eq!(begin.get(), Some(&-1));
        assert_eq!(end.get(), None);
        assert_eq!((end - 1).get(), Some(&4));
        assert_eq!((begin - 1).get(), None);
        assert!(begin < end);
        assert!(end >= begin);
    }

    #[test]
    fn moves_in_both_directions() {
        let deque: Deque<_> = (0..10).collect();
        let mut cursor = deque.begin();

        cursor.move_next();
        assert_eq!(cursor.get(), Some(&1));

        let before = cursor;
        cursor.move_next();
        assert_eq!(before.get(), Some(&1));
        assert_eq!(cursor.get(), Some(&2));

        cursor += 5;
        assert_eq!(cursor.get(), Some(&7));
        cursor -= 3;
        assert_eq!(cursor.get(), Some(&4));
        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&3));

        assert_eq!((cursor + 6).get(), Some(&9));
        assert_eq!((cursor - 3).get(), Some(&0));
        assert_eq!((cursor + 7).get(), None);
        assert_eq!(cursor - deque.begin(), 3);
        assert_eq!(deque.begin().distance(&cursor), -3);
    }

    #[test]
    fn exclusive_cursor_distance() {
        let mut deque: Deque<_> = (0..6).collect();
        let end = deque.end_mut();
        let earlier = end.as_cursor() - 4;
        assert_eq!(end.distance(&earlier), 4);
        assert_eq!(earlier.distance(&end), -4);
        assert_eq!(earlier.get(), Some(&2));
    }

    #[test]
    fn stays_on_element_across_front_mutation() {
        let mut deque: Deque<_> = (10..15).collect();
        let mut cursor = deque.cursor_mut(2);
        assert_eq!(cursor.get(), Some(&12));

        for i in 0..20 {
            cursor.deque_mut().push_front(i);
        }
        assert_eq!(cursor.get(), Some(&12));
        assert_eq!(cursor.index(), 22);

        for _ in 0..21 {
            cursor.deque_mut().pop_front();
        }
        assert_eq!(cursor.get(), Some(&12));
        assert_eq!(cursor.index(), 1);

        cursor.deque_mut().pop_front();
        cursor.deque_mut().pop_front();
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.index(), -1);

        cursor.deque_mut().push_front(12);
        *cursor.get_mut().unwrap() += 100;
        assert_eq!(deque, [112, 13, 14]);
    }

    #[test]
    fn back_operations_are_not_compensated() {
        let mut deque: Deque<_> = (0..4).collect();
        let mut cursor = deque.cursor_mut(1);

        cursor.deque_mut().push_back(4);
        cursor.deque_mut().pop_back();
        cursor.deque_mut().pop_back();
        assert_eq!(cursor.get(), Some(&1));

        // erasing before the cursor slides the next element under it
        cursor.deque_mut().erase(0);
        assert_eq!(cursor.get(), Some(&2));
    }

    #[test]
    fn comparisons_use_the_recorded_front_shift() {
        let mut deque: Deque<_> = (0..4).collect();
        let old = deque.cursor(1).position();
        deque.push_front(-1);

        let a = deque.cursor(1);
        let b = deque.cursor(2);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a);
        assert_ne!(a, b);
        assert_eq!(a + 1, b);
        assert_eq!(b - 1, a);
        assert_eq!(old, 1);
    }

    #[test]
    fn cursors_into_different_deques_are_unrelated() {
        let a: Deque<_> = (0..4).collect();
        let b = a.clone();

        assert_eq!(a.begin(), a.begin());
        assert_ne!(a.begin(), b.begin());
        assert_eq!(PartialOrd::partial_cmp(&a.begin(), &b.begin()), None);
        assert!(!(a.begin() < b.end()));
        assert!(!(a.begin() >= b.begin()));
    }

    #[test]
    fn insert_and_erase_through_cursor() {
        let mut deque = Deque::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0);

        assert_eq!((deque.begin_mut() + 1).erase(), Some(1));
        assert_eq!(deque, [0, 2]);

        (deque.begin_mut() + 1).insert(9);
        assert_eq!(deque, [0, 9, 2]);

        deque.end_mut().insert(3);
        assert_eq!(deque, [0, 9, 2, 3]);
        assert_eq!(deque.end_mut().erase(), None);

        let mut cursor = deque.begin_mut();
        cursor.deque_mut().push_front(-1);
        cursor.insert(-5);
        assert_eq!(deque, [-1, -5, 0, 9, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds in `insert`")]
    fn inserting_before_the_front_panics() {
        let mut deque: Deque<_> = (0..4).collect();
        (deque.begin_mut() - 1).insert(0);
    }

    #[test]
    fn read_only_views_of_mutable_cursor() {
        let mut deque: Deque<_> = (0..4).collect();
        let mut cursor = deque.begin_mut() + 2;
        cursor.deque_mut().push_front(-1);

        let view = cursor.as_cursor();
        assert_eq!(view.get(), Some(&2));
        assert_eq!(view, cursor);

        let shared = cursor.into_cursor();
        assert_eq!(shared.get(), Some(&2));
        assert_eq!(shared.index(), 3);
        assert_eq!(shared.position() - shared.offset(), 2);
    }

    #[test]
    fn debug_shows_position_and_element() {
        use alloc::format;

        let deque: Deque<_> = ['x', 'y'].into();
        let text = format!("{:?}", deque.cursor(1));
        assert_eq!(text, "Cursor { position: 1, offset: 0, element: Some('y') }");
    }
}
