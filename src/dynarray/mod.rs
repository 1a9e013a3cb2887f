// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Checked, overflow-safe dynamic array and the allocation primitives it
//! builds on.
//!
//! [`Seq`] is the runtime's one growable container. It keeps the same
//! `allocated`/`n` split the C runtime it's modeled on uses (capacity never
//! shrinks except on [`Seq::clear`]; logical length can shrink and regrow
//! freely within it), but expresses "zero newly-exposed slots" and "drop
//! vacated slots" as a single `T: Default` bound rather than a caller-supplied
//! free-function pointer: assigning `T::default()` into a vacated slot runs
//! that slot's `Drop` for owned types (e.g. `Option<Box<Child, A>>` vacates to
//! `None`, dropping the prior child) for free.

#[cfg(any(test, feature = "fault-injection"))]
pub mod fault;

use crate::core_compat::alloc::{AllocError, Allocator, Global};
use crate::core_compat::vec::Vec;

/// A checked, overflow-safe dynamic array.
///
/// `Seq`'s backing [`Vec`] is always fully initialized out to its capacity;
/// `n` tracks the logical, caller-visible length, which may be less than
/// capacity. This mirrors the `allocated_`/`n_` fields of the C dynamic array
/// this type is modeled on and lets every operation below be expressed in
/// safe Rust: "reserve more capacity" is "grow the backing vec, which
/// default-initializes the new slots", and "shrink" is "overwrite the
/// vacated slots with their default", with no unsafe writes into
/// uninitialized memory anywhere in this module.
pub struct Seq<T, A: Allocator + Clone = Global> {
    buf: Vec<T, A>,
    n: usize,
}

impl<T: Default, A: Allocator + Clone> Seq<T, A> {
    /// Creates an empty sequence using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: Vec::new_in(alloc),
            n: 0,
        }
    }

    /// The logical length of the sequence.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the sequence is logically empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The current capacity (the C runtime's `allocated`).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The content as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.n]
    }

    /// The content as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.n]
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`, matching the bounds-checked-abort
    /// discipline of every other accessor in this runtime.
    pub fn get(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) {
        self.as_mut_slice()[index] = value;
    }

    /// Ensures capacity is at least `min_cap`, without touching the logical
    /// length. Used by [`crate::string::Str`] to reserve room for a
    /// terminator byte just past its content without that byte becoming
    /// part of the logical content.
    pub(crate) fn reserve_capacity_at_least(&mut self, min_cap: usize) -> Result<(), AllocError> {
        if self.capacity() < min_cap {
            self.reserve_for_growth(min_cap - self.capacity())?;
        }
        Ok(())
    }

    /// Accesses a slot within capacity but possibly past the logical length.
    /// Only used for the terminator byte of [`crate::string::Str`].
    ///
    /// # Panics
    /// Panics if `index >= self.capacity()`.
    pub(crate) fn capacity_slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }

    /// A prefix of `len` elements, which may reach past the logical length
    /// and into capacity. Only used to hand back a content-plus-terminator
    /// view from [`crate::string::Str::c_str`].
    ///
    /// # Panics
    /// Panics if `len > self.capacity()`.
    pub(crate) fn capacity_prefix(&self, len: usize) -> &[T] {
        &self.buf[..len]
    }

    /// Frees the backing storage and resets to empty.
    ///
    /// Unlike [`Seq::set_len`]`(0)`, this actually releases memory; it's the
    /// only operation that ever decreases capacity.
    pub fn clear(&mut self) {
        let alloc = self.buf.allocator().clone();
        self.buf = Vec::new_in(alloc);
        self.n = 0;
    }

    /// Appends `value`, growing the backing storage if necessary.
    pub fn add(&mut self, value: T) -> Result<(), AllocError> {
        if self.n == self.capacity() {
            self.reserve_for_growth(1)?;
        }
        self.buf[self.n] = value;
        self.n += 1;
        Ok(())
    }

    /// Sets the logical length to `new_len`.
    ///
    /// Growing zero-initializes the newly-exposed region (via `T::default`);
    /// shrinking overwrites the vacated region with `T::default`, releasing
    /// any resources those slots owned. Capacity grows as needed via the
    /// same policy as [`Seq::add`], and never shrinks here.
    pub fn set_len(&mut self, new_len: usize) -> Result<(), AllocError> {
        if self.capacity() < new_len {
            self.reserve_for_growth(new_len - self.capacity())?;
        }
        if new_len < self.n {
            for slot in &mut self.buf[new_len..self.n] {
                *slot = T::default();
            }
        } else if new_len > self.n {
            for slot in &mut self.buf[self.n..new_len] {
                *slot = T::default();
            }
        }
        self.n = new_len;
        Ok(())
    }

    /// Grows capacity by at least `need_more` beyond the current capacity,
    /// per the policy in this runtime's allocation contract:
    ///
    /// `new_cap` is the smallest size satisfying `new_cap >= cap + need_more`,
    /// `new_cap >= 8`, and `new_cap >= 2 * cap`, computed with overflow
    /// checks throughout. A call that would leave capacity unchanged (because
    /// every bound above is already satisfied, e.g. `need_more == 0` on an
    /// already-huge buffer) fails rather than silently succeeding with
    /// identical capacity.
    fn reserve_for_growth(&mut self, need_more: usize) -> Result<(), AllocError> {
        let cap = self.capacity();
        let mut new_cap = cap.checked_add(need_more).ok_or(AllocError)?;
        if new_cap < 8 {
            new_cap = 8;
        }
        if let Some(doubled) = cap.checked_mul(2)
            && new_cap < doubled
        {
            new_cap = doubled;
        }
        if new_cap <= cap {
            return Err(AllocError);
        }
        // `try_reserve_exact` overflow-checks the byte-size computation
        // itself (via `Layout::array`), which is this runtime's equivalent of
        // the C allocator's `count > MAX_SIZE / size` guard computed before
        // the multiply.
        self.buf
            .try_reserve_exact(new_cap - self.buf.len())
            .map_err(|_| AllocError)?;
        self.buf.resize_with(new_cap, T::default);
        Ok(())
    }
}

impl<T: Default, A: Allocator + Clone + Default> Default for Seq<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}
