//! Finite field construction and raw arithmetic
//!
//! Three backends share one interface, selected from the order:
//!
//! - GF(p): residues modulo a prime
//! - GF(2^m): bit vectors, XOR addition, carry-less multiplication
//! - GF(p^m): base-p digit vectors multiplied modulo an irreducible polynomial

use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

use crate::element::FieldElement;
use crate::order::{add_mod, mul_mod, prime_power};
use crate::poly;

/// Finite field errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unsupported field order {0}: must be a prime or a prime power")]
    UnsupportedOrder(u64),

    #[error("value {value} is not an element of a field of order {order}")]
    OutOfRange { value: u64, order: u64 },

    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    Prime,
    Binary {
        /// Reduction bits of the modulus, without the leading `x^m` term
        reduction: u64,
    },
    Extension {
        /// Monic irreducible modulus, lowest degree first
        modulus: Vec<u64>,
    },
}

/// A finite field of order `p^m`.
///
/// Immutable once built. Elements borrow the field they were created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteField {
    order: u64,
    characteristic: u64,
    degree: u32,
    backend: Backend,
}

impl FiniteField {
    /// Build the field with `order` elements.
    pub fn new(order: u64) -> Result<Self, FieldError> {
        let (characteristic, degree) =
            prime_power(order).ok_or(FieldError::UnsupportedOrder(order))?;

        let backend = match (characteristic, degree) {
            (_, 1) => Backend::Prime,
            (2, m) => {
                let modulus = poly::smallest_irreducible(2, m);
                let reduction = poly::to_integer(&modulus[..m as usize], 2);
                Backend::Binary { reduction }
            }
            (p, m) => Backend::Extension {
                modulus: poly::smallest_irreducible(p, m),
            },
        };

        Ok(Self {
            order,
            characteristic,
            degree,
            backend,
        })
    }

    /// Number of elements
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The prime `p` of `p^m`. For characteristic 2, `-x == x` for every element.
    pub fn characteristic(&self) -> u64 {
        self.characteristic
    }

    /// The extension degree `m` of `p^m`
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Integer encoding of the modulus polynomial, including its leading term.
    ///
    /// `None` for prime fields, and for extensions whose modulus does not fit
    /// in a `u64` (only GF(2^63) in practice).
    pub fn modulus(&self) -> Option<u128> {
        match &self.backend {
            Backend::Prime => None,
            Backend::Binary { reduction } => Some((1u128 << self.degree) | *reduction as u128),
            Backend::Extension { modulus } => modulus.iter().rev().try_fold(0u128, |acc, &d| {
                acc.checked_mul(self.characteristic as u128)?.checked_add(d as u128)
            }),
        }
    }

    /// Lift `value` into the field.
    pub fn element(&self, value: u64) -> Result<FieldElement<'_>, FieldError> {
        if value >= self.order {
            return Err(FieldError::OutOfRange {
                value,
                order: self.order,
            });
        }
        Ok(FieldElement::new(self, value))
    }

    /// The integer `value` as a field element, i.e. `value` copies of one.
    pub fn reduce(&self, value: i128) -> FieldElement<'_> {
        let residue = value.rem_euclid(self.characteristic as i128) as u64;
        FieldElement::new(self, residue)
    }

    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement::new(self, 0)
    }

    pub fn one(&self) -> FieldElement<'_> {
        FieldElement::new(self, 1)
    }

    /// A uniformly distributed element.
    pub fn random<R>(&self, rng: &mut R) -> FieldElement<'_>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        FieldElement::new(self, rng.gen_range(0..self.order))
    }

    // Raw arithmetic on encoded values. Inputs are always below `order`.

    pub(crate) fn add(&self, a: u64, b: u64) -> u64 {
        match &self.backend {
            Backend::Prime => add_mod(a, b, self.order),
            Backend::Binary { .. } => a ^ b,
            Backend::Extension { .. } => {
                let p = self.characteristic;
                poly::to_integer(
                    &poly::add(&poly::from_integer(a, p), &poly::from_integer(b, p), p),
                    p,
                )
            }
        }
    }

    pub(crate) fn neg(&self, a: u64) -> u64 {
        match &self.backend {
            Backend::Prime if a == 0 => 0,
            Backend::Prime => self.order - a,
            Backend::Binary { .. } => a,
            Backend::Extension { .. } => {
                let p = self.characteristic;
                poly::to_integer(&poly::neg(&poly::from_integer(a, p), p), p)
            }
        }
    }

    pub(crate) fn mul(&self, a: u64, b: u64) -> u64 {
        match &self.backend {
            Backend::Prime => mul_mod(a, b, self.order),
            Backend::Binary { reduction } => clmul_reduce(a, b, self.degree, *reduction),
            Backend::Extension { modulus } => {
                let p = self.characteristic;
                let product = poly::mul_rem(
                    &poly::from_integer(a, p),
                    &poly::from_integer(b, p),
                    modulus,
                    p,
                );
                poly::to_integer(&product, p)
            }
        }
    }

    pub(crate) fn pow(&self, mut base: u64, mut exp: u64) -> u64 {
        let mut result = 1;
        while exp != 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse via `a^(order - 2)`.
    pub(crate) fn inv(&self, a: u64) -> Result<u64, FieldError> {
        if a == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(a, self.order - 2))
    }
}

/// Multiplication in GF(2^m), shift-and-add with reduction on carry.
fn clmul_reduce(mut a: u64, mut b: u64, degree: u32, reduction: u64) -> u64 {
    let top = 1u64 << (degree - 1);
    let mask = (1u64 << degree) - 1;
    let mut result = 0u64;

    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        let carry = a & top != 0;
        a = (a << 1) & mask;
        if carry {
            a ^= reduction;
        }
        b >>= 1;
    }
    result
}
