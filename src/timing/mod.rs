//! Rate-limiting utilities
//!
//! Hand-rolled throttle and debounce for the recompute triggers. Both
//! are plain state machines fed timestamps: they decide when a timer
//! must be armed and whether a firing timer should actually run, while
//! the DOM adapter owns the `setTimeout` side. This keeps them
//! cancelable and testable without a browser clock.

pub mod debounce;
pub mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
