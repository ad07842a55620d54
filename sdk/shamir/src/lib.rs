//! Tessera Shamir Secret Sharing
//!
//! Implements Shamir's (k,n)-threshold scheme over any finite field from
//! [`tessera_field`].
//!
//! # Flow
//!
//! ```text
//! ┌─────────────┐   share(k, n, s)   ┌──────────────────────────┐
//! │   secret s  │───────────────────▶│ (1, y1) (2, y2) … (n, yn) │
//! └─────────────┘                    └────────────┬─────────────┘
//!        ▲                                        │ any k of them
//!        │            reveal(shares)              │
//!        └────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tessera_field::FiniteField;
//! use tessera_shamir::ShamirScheme;
//!
//! let gf = FiniteField::new(251).unwrap();
//! let scheme = ShamirScheme::new(&gf);
//!
//! let shares = scheme.share(4, 5, 100).unwrap();
//! assert_eq!(scheme.reveal(&shares[1..]).unwrap(), 100);
//! ```
//!
//! Shares are plain integer pairs, so they are linear in the secret: adding
//! two share sets point by point shares the sum of the secrets.

pub mod scheme;
pub mod share;

pub use scheme::{ShamirError, ShamirScheme};
pub use share::{ParseShareError, Share};
pub use tessera_field::{FieldError, FiniteField};
