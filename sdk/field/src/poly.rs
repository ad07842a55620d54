//! Polynomials over GF(p)
//!
//! Coefficients are stored lowest degree first and kept trimmed, so the zero
//! polynomial is the empty vector. These routines back the extension field
//! multiplication and the search for an irreducible modulus.

use crate::order::{add_mod, mul_mod, pow_mod, prime_divisors};

pub(crate) type Poly = Vec<u64>;

fn trim(mut a: Poly) -> Poly {
    while a.last() == Some(&0) {
        a.pop();
    }
    a
}

fn degree(a: &[u64]) -> Option<usize> {
    a.len().checked_sub(1)
}

/// Digits of `value` in base `p`, i.e. its polynomial form.
pub(crate) fn from_integer(mut value: u64, p: u64) -> Poly {
    let mut digits = Vec::new();
    while value != 0 {
        digits.push(value % p);
        value /= p;
    }
    digits
}

/// Inverse of [`from_integer`]. The caller guarantees the result fits.
pub(crate) fn to_integer(a: &[u64], p: u64) -> u64 {
    a.iter().rev().fold(0, |acc, &d| acc * p + d)
}

pub(crate) fn add(a: &[u64], b: &[u64], p: u64) -> Poly {
    let len = a.len().max(b.len());
    let sum = (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            add_mod(x, y, p)
        })
        .collect();
    trim(sum)
}

pub(crate) fn neg(a: &[u64], p: u64) -> Poly {
    a.iter().map(|&c| if c == 0 { 0 } else { p - c }).collect()
}

pub(crate) fn sub(a: &[u64], b: &[u64], p: u64) -> Poly {
    add(a, &neg(b, p), p)
}

pub(crate) fn mul(a: &[u64], b: &[u64], p: u64) -> Poly {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut product = vec![0u64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = add_mod(product[i + j], mul_mod(x, y, p), p);
        }
    }
    trim(product)
}

/// Remainder of `a` divided by the non-zero polynomial `m`.
pub(crate) fn rem(a: &[u64], m: &[u64], p: u64) -> Poly {
    let mut r = trim(a.to_vec());
    let Some(dm) = degree(m) else {
        return r;
    };
    let lead_inv = pow_mod(m[dm], p - 2, p);

    while let Some(dr) = degree(&r) {
        if dr < dm {
            break;
        }
        let factor = mul_mod(r[dr], lead_inv, p);
        let shift = dr - dm;
        for (i, &c) in m.iter().enumerate() {
            let t = mul_mod(factor, c, p);
            r[shift + i] = add_mod(r[shift + i], p - t, p);
        }
        r = trim(r);
    }
    r
}

pub(crate) fn mul_rem(a: &[u64], b: &[u64], m: &[u64], p: u64) -> Poly {
    rem(&mul(a, b, p), m, p)
}

fn gcd(a: &[u64], b: &[u64], p: u64) -> Poly {
    let mut a = trim(a.to_vec());
    let mut b = trim(b.to_vec());
    while !b.is_empty() {
        let r = rem(&a, &b, p);
        a = b;
        b = r;
    }
    a
}

/// `a^exp mod m`
fn pow_rem(a: &[u64], mut exp: u64, m: &[u64], p: u64) -> Poly {
    let mut result = rem(&[1], m, p);
    let mut base = rem(a, m, p);
    while exp != 0 {
        if exp & 1 == 1 {
            result = mul_rem(&result, &base, m, p);
        }
        base = mul_rem(&base, &base, m, p);
        exp >>= 1;
    }
    result
}

/// `x^(p^k) mod m`, by raising to the `p`-th power `k` times.
fn frobenius_x(k: u32, m: &[u64], p: u64) -> Poly {
    (0..k).fold(rem(&[0, 1], m, p), |acc, _| pow_rem(&acc, p, m, p))
}

/// Rabin's test for a monic polynomial of degree `n >= 1` over GF(p).
pub(crate) fn is_irreducible(f: &[u64], p: u64) -> bool {
    let Some(n) = degree(f) else {
        return false;
    };
    let n = n as u32;
    let x: Poly = vec![0, 1];

    if !sub(&frobenius_x(n, f, p), &rem(&x, f, p), p).is_empty() {
        return false;
    }
    prime_divisors(n).into_iter().all(|q| {
        let h = sub(&frobenius_x(n / q, f, p), &x, p);
        gcd(f, &h, p).len() == 1
    })
}

/// Lexicographically smallest monic irreducible polynomial of degree `m`
/// over GF(p), with `p^m` representable in a `u64`.
pub(crate) fn smallest_irreducible(p: u64, m: u32) -> Poly {
    let mut candidate: u64 = 0;
    loop {
        let mut f = from_integer(candidate, p);
        f.resize(m as usize, 0);
        f.push(1);
        // A zero constant term means x divides f.
        if f[0] != 0 && is_irreducible(&f, p) {
            return f;
        }
        candidate += 1;
    }
}
