//! Splitting and reconstruction
//!
//! A secret `s` becomes the constant term of a random polynomial
//!
//! ```text
//! p(x) = s + a1·x + a2·x^2 + ... + a(k-1)·x^(k-1)
//! ```
//!
//! and share `i` is `(i, p(i))` for `i = 1..=n`. Any `k` shares determine `p`
//! and therefore `p(0) = s`; `k - 1` shares are consistent with every secret.

use std::collections::HashSet;

use log::debug;
use rand::{CryptoRng, RngCore};
use tessera_field::{FieldElement, FieldError, FiniteField};
use thiserror::Error;

use crate::share::Share;

/// Secret sharing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid parameters: k={k}, n={n}")]
    InvalidParameters { k: usize, n: usize },

    #[error("secret {secret} is not an element of a field of order {order}")]
    InvalidSecret { secret: u64, order: u64 },

    #[error("no shares supplied")]
    EmptyInput,

    #[error("duplicate evaluation point x={0}")]
    DuplicatePoint(u64),

    #[error("share at x=0 exposes the secret directly")]
    ZeroPoint,

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// The polynomial hiding one secret. Built and dropped inside a single
/// [`ShamirScheme::share_with_rng`] call; deliberately not `Debug`.
struct SecretPolynomial<'f> {
    /// Lowest degree first, so `coefficients[0]` is the secret
    coefficients: Vec<FieldElement<'f>>,
}

impl<'f> SecretPolynomial<'f> {
    fn random<R>(secret: FieldElement<'f>, degree: usize, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let field = secret.field();
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret);
        coefficients.extend((0..degree).map(|_| field.random(rng)));
        Self { coefficients }
    }

    /// Horner evaluation at `x`
    fn evaluate(&self, x: FieldElement<'f>) -> FieldElement<'f> {
        self.coefficients
            .iter()
            .rev()
            .fold(x.field().zero(), |acc, &c| acc * x + c)
    }
}

/// Computes `p(0)` from samples of `p` at distinct non-zero points.
///
/// Basis `i` at zero is `∏_{j≠i} (-xj) / (xi - xj)`. The numerators share
/// the product `P = ∏ (-xj)`, so each one is `P / (-xi)`. Negation comes from
/// the field, which makes this exact in every characteristic without any
/// sign fix-up.
pub(crate) fn interpolate_at_zero<'f>(
    field: &'f FiniteField,
    points: &[(FieldElement<'f>, FieldElement<'f>)],
) -> Result<FieldElement<'f>, FieldError> {
    let product = points
        .iter()
        .fold(field.one(), |acc, &(x, _)| acc * -x);

    let mut secret = field.zero();
    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut denominator = field.one();
        for (j, &(xj, _)) in points.iter().enumerate() {
            if i != j {
                denominator *= xi - xj;
            }
        }

        let numerator = (product / -xi)?;
        secret += yi * (numerator / denominator)?;
    }

    Ok(secret)
}

/// Shamir's (k,n)-threshold scheme over one finite field.
///
/// Stateless: the scheme only borrows the field, so it is `Copy` and can be
/// used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ShamirScheme<'f> {
    field: &'f FiniteField,
}

impl<'f> ShamirScheme<'f> {
    pub fn new(field: &'f FiniteField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'f FiniteField {
        self.field
    }

    /// Split `secret` into `n` shares, any `k` of which reveal it.
    ///
    /// Coefficients come from the thread-local CSPRNG.
    pub fn share(&self, k: usize, n: usize, secret: u64) -> Result<Vec<Share>, ShamirError> {
        self.share_with_rng(k, n, secret, &mut rand::thread_rng())
    }

    /// Split `secret` into `n` shares with coefficients drawn from `rng`.
    ///
    /// Shares are issued at `x = 1..=n`; `x = 0` would be the secret itself.
    ///
    /// # Errors
    ///
    /// - [`ShamirError::InvalidParameters`] unless `1 <= k <= n < order`
    /// - [`ShamirError::InvalidSecret`] if `secret >= order`
    pub fn share_with_rng<R>(
        &self,
        k: usize,
        n: usize,
        secret: u64,
        rng: &mut R,
    ) -> Result<Vec<Share>, ShamirError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let order = self.field.order();
        // Every x in 1..=n must be a distinct non-zero element.
        if k == 0 || n < k || n as u64 >= order {
            return Err(ShamirError::InvalidParameters { k, n });
        }

        let secret = self
            .field
            .element(secret)
            .map_err(|_| ShamirError::InvalidSecret { secret, order })?;

        debug!("splitting secret into {n} shares, threshold {k}, field order {order}");

        let polynomial = SecretPolynomial::random(secret, k - 1, rng);
        (1..=n as u64)
            .map(|x| -> Result<Share, ShamirError> {
                let x = self.field.element(x)?;
                Ok(Share::new(x.value(), polynomial.evaluate(x).value()))
            })
            .collect()
    }

    /// Reconstruct the secret from `shares` by Lagrange interpolation at zero.
    ///
    /// Fewer than `k` shares cannot be detected: the result is then a
    /// well-formed field element that matches the secret only by chance.
    /// Agreeing on `k` is the caller's job.
    ///
    /// # Errors
    ///
    /// - [`ShamirError::EmptyInput`] for an empty slice
    /// - [`ShamirError::ZeroPoint`] for a share at `x = 0`
    /// - [`ShamirError::DuplicatePoint`] when two shares have the same `x`
    /// - [`ShamirError::Field`] when a coordinate is not an element of the field
    pub fn reveal(&self, shares: &[Share]) -> Result<u64, ShamirError> {
        if shares.is_empty() {
            return Err(ShamirError::EmptyInput);
        }

        let mut seen = HashSet::with_capacity(shares.len());
        for share in shares {
            if share.x == 0 {
                return Err(ShamirError::ZeroPoint);
            }
            if !seen.insert(share.x) {
                return Err(ShamirError::DuplicatePoint(share.x));
            }
        }

        let points = shares
            .iter()
            .map(|s| -> Result<_, FieldError> {
                Ok((self.field.element(s.x)?, self.field.element(s.y)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "revealing secret from {} shares, field order {}",
            points.len(),
            self.field.order()
        );

        Ok(interpolate_at_zero(self.field, &points)?.value())
    }
}
