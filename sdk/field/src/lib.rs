//! Tessera Finite Fields
//!
//! Arithmetic over GF(p^m) for any prime power order that fits in a `u64`.
//!
//! ```text
//!   order ──▶ prime_power ──▶ (p, m)
//!                              │
//!            ┌─────────────────┼──────────────────┐
//!            ▼                 ▼                  ▼
//!        m = 1: GF(p)     p = 2: GF(2^m)     otherwise: GF(p^m)
//!        residues         bit vectors        base-p digit vectors
//! ```
//!
//! Elements are encoded as integers in `[0, order)`. For extension fields
//! the base-p digits of that integer are the polynomial coefficients, lowest
//! degree first, so GF(2^8) elements are ordinary bytes.
//!
//! # Example
//!
//! ```
//! use tessera_field::FiniteField;
//!
//! let gf = FiniteField::new(256).unwrap();
//! let x = gf.element(0x57).unwrap();
//! let y = gf.element(0x83).unwrap();
//!
//! assert_eq!((x * y).value(), 0xC1);
//! assert_eq!(-x, x);
//! ```

pub mod element;
pub mod field;
pub mod order;
mod poly;

pub use element::FieldElement;
pub use field::{FieldError, FiniteField};
pub use order::{is_prime, prime_power};
