//! Stack growth guard for deep recursion.
//!
//! Evaluation and code generation are plain recursive walks, so a tree
//! nested thousands of levels deep (a long chain of `x plus x plus ...`)
//! can exhaust the thread's stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! - **Native targets**: `stacker::maybe_grow`
//! - **WASM targets**: passthrough

/// Remaining stack below which a new segment is allocated (64KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
