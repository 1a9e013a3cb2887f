// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A fault-injecting [`Allocator`] for exercising allocation-failure recovery
//! paths.
//!
//! Arm it with [`set_alloc_fail`] before running the code under test; the
//! `n`th allocation request counted from the call to `set_alloc_fail` fails,
//! and every request before and after it succeeds normally. This mirrors the
//! C runtime's `trunnel_provoke_alloc_failure` countdown: a positive counter
//! decrements on every allocation, the request that decrements it to zero
//! fails, and the counter then sits at zero (disarmed) until rearmed.

use core::ptr::NonNull;
use core::sync::atomic::{AtomicIsize, Ordering};

use crate::core_compat::alloc::{AllocError, Allocator, Global, Layout};

static COUNTDOWN: AtomicIsize = AtomicIsize::new(0);

/// Arms the injector: the `n`th allocation from now fails; `n` must be at
/// least 1. Every allocation before it, and every allocation after, succeeds.
pub fn set_alloc_fail(n: usize) {
    COUNTDOWN.store(n as isize, Ordering::SeqCst);
}

/// Disarms the injector. Safe to call whether or not it's currently armed.
pub fn clear_alloc_fail() {
    COUNTDOWN.store(0, Ordering::SeqCst);
}

/// Decrements the countdown if armed, reporting whether this call should
/// fail (the decrement that reaches zero).
fn tick() -> bool {
    let mut cur = COUNTDOWN.load(Ordering::SeqCst);
    loop {
        if cur <= 0 {
            return false;
        }
        let next = cur - 1;
        match COUNTDOWN.compare_exchange_weak(cur, next, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return next == 0,
            Err(actual) => cur = actual,
        }
    }
}

/// An [`Allocator`] that forwards to [`Global`] except when the process-wide
/// countdown armed by [`set_alloc_fail`] fires, at which point it reports
/// [`AllocError`] instead.
///
/// The countdown is process-global rather than per-instance, so tests that
/// use it must not run concurrently with each other (the teacher's own test
/// suite has the same constraint on its single-threaded `#[test]` model).
#[derive(Clone, Copy, Debug, Default)]
pub struct FaultInjector;

// SAFETY: every method delegates to `Global`, an already-valid `Allocator`
// impl, after an early return that hands back neither allocation nor
// dangling memory; the contract `Allocator` requires is satisfied by
// `Global` alone.
unsafe impl Allocator for FaultInjector {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if tick() {
            return Err(AllocError);
        }
        Global.allocate(layout)
    }

    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if tick() {
            return Err(AllocError);
        }
        Global.allocate_zeroed(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded as-is; caller upholds `Allocator::deallocate`'s
        // contract for us, and `ptr`/`layout` were produced by this same
        // allocator (which only ever delegates to `Global`).
        unsafe { Global.deallocate(ptr, layout) }
    }

    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if tick() {
            return Err(AllocError);
        }
        // SAFETY: forwarded as-is; see `deallocate`.
        unsafe { Global.grow(ptr, old_layout, new_layout) }
    }

    unsafe fn grow_zeroed(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if tick() {
            return Err(AllocError);
        }
        // SAFETY: forwarded as-is; see `deallocate`.
        unsafe { Global.grow_zeroed(ptr, old_layout, new_layout) }
    }

    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        // Shrinking never fails in this runtime's fault model: the C runtime
        // this is grounded on only ever provokes failure on growing
        // allocations, since a failing shrink would have no recovery path
        // worth exercising.
        // SAFETY: forwarded as-is; see `deallocate`.
        unsafe { Global.shrink(ptr, old_layout, new_layout) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_never_fails() {
        clear_alloc_fail();
        for _ in 0..16 {
            assert!(!tick());
        }
    }

    #[test]
    fn fires_exactly_once_at_the_nth_call() {
        set_alloc_fail(3);
        assert!(!tick());
        assert!(!tick());
        assert!(tick());
        for _ in 0..8 {
            assert!(!tick());
        }
    }

    #[test]
    fn set_alloc_fail_one_fails_immediately() {
        set_alloc_fail(1);
        assert!(tick());
        assert!(!tick());
    }

    #[test]
    fn clear_after_arming_disarms() {
        set_alloc_fail(2);
        clear_alloc_fail();
        for _ in 0..8 {
            assert!(!tick());
        }
    }
}
