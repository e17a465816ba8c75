//! # square-core - f32 square kernel
//!
//! Native side of the `core` extension module. The module exposes one
//! callable, `square`, which squares a single real number in binary32
//! precision and hands the result back to the host as a boxed double.
//!
//! ## Call path
//!
//! 1. [`check_arity`] - exactly one positional argument
//! 2. host conversion to a double (the host raises its own conversion errors)
//! 3. [`narrow`] - double to binary32
//! 4. [`square`] - `x * x` in f32
//! 5. [`widen`] - binary32 back to a double for boxing
//!
//! Steps 3 to 5 are bundled as [`square_boxed`].
//!
//! Everything here is pure and reentrant. There is no module state.
//!
//! ## Example
//!
//! ```
//! use square_core::{check_arity, square_boxed, ArgumentError};
//!
//! check_arity(1)?;
//! assert_eq!(square_boxed(-5.0), 25.0);
//!
//! assert!(matches!(check_arity(0), Err(ArgumentError::Arity { given: 0, .. })));
//! # Ok::<(), ArgumentError>(())
//! ```

pub mod args;
pub mod error;
pub mod kernel;

pub use args::check_arity;
pub use error::{ArgumentError, Result};
pub use kernel::{narrow, square, square_boxed, widen};

/// Positional arguments `square` accepts.
pub const SQUARE_ARITY: usize = 1;
