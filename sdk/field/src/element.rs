//! Field elements with operator arithmetic

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::ptr;

use crate::field::{FieldError, FiniteField};

/// An element of a [`FiniteField`].
///
/// Elements only combine with elements of the same field. `+`, `-` and `*`
/// are total; `/` returns a `Result` because dividing by zero is undefined.
///
/// # Panics
///
/// The operators panic when their operands belong to different fields.
#[derive(Clone, Copy)]
pub struct FieldElement<'f> {
    field: &'f FiniteField,
    value: u64,
}

impl<'f> FieldElement<'f> {
    pub(crate) fn new(field: &'f FiniteField, value: u64) -> Self {
        Self { field, value }
    }

    /// Integer encoding of the element, in `[0, order)`
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn field(&self) -> &'f FiniteField {
        self.field
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Multiplicative inverse.
    pub fn inverse(self) -> Result<Self, FieldError> {
        let value = self.field.inv(self.value)?;
        Ok(Self::new(self.field, value))
    }

    /// `self^exp`. Negative exponents raise the inverse, so they fail on zero.
    pub fn pow(self, exp: i64) -> Result<Self, FieldError> {
        let base = if exp < 0 { self.inverse()? } else { self };
        let value = self.field.pow(base.value, exp.unsigned_abs());
        Ok(Self::new(self.field, value))
    }

    fn same_field(&self, other: &Self) -> bool {
        ptr::eq(self.field, other.field) || self.field == other.field
    }

    fn check_field(&self, other: &Self) {
        assert!(
            self.same_field(other),
            "cannot combine elements of GF({}) and GF({})",
            self.field.order(),
            other.field.order()
        );
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.same_field(other)
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in GF({})", self.value, self.field.order())
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<'f> Add for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: Self) -> Self::Output {
        self.check_field(&rhs);
        Self::new(self.field, self.field.add(self.value, rhs.value))
    }
}

/// Additive inverse. The identity in characteristic 2.
impl<'f> Neg for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> Self::Output {
        Self::new(self.field, self.field.neg(self.value))
    }
}

impl<'f> Sub for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<'f> Mul for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.check_field(&rhs);
        Self::new(self.field, self.field.mul(self.value, rhs.value))
    }
}

/// Field division, multiplication by the inverse of `rhs`.
impl<'f> Div for FieldElement<'f> {
    type Output = Result<FieldElement<'f>, FieldError>;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self.check_field(&rhs);
        Ok(self * rhs.inverse()?)
    }
}

impl AddAssign for FieldElement<'_> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement<'_> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement<'_> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
