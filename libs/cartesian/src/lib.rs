//! Two-component floating-point vector value type.
//!
//! [`Cartesian2`] is the numeric primitive behind 2D points, directions,
//! texture coordinates and screen-space offsets. Every operation comes in two
//! forms: one that returns a new value and an `_into` form that writes into a
//! caller-owned `result` and hands the same reference back. Values can be
//! staged into flat `f64` buffers through the [`Packable`] trait.
//!
//! ```rust
//! use cartesian::{Cartesian2, Packable};
//!
//! let a = Cartesian2::new(2.0, 3.0);
//! assert_eq!(Cartesian2::magnitude_squared(a), 13.0);
//!
//! let mut buffer = [0.0; 4];
//! a.pack_at(&mut buffer, 1).unwrap();
//! assert_eq!(Cartesian2::unpack_at(&buffer, 1).unwrap(), a);
//! ```

pub mod cartesian2;
pub mod error;
pub mod packable;

pub use cartesian2::Cartesian2;
pub use error::{CartesianError, CartesianResult};
pub use packable::Packable;
