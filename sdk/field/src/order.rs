//! Field order classification
//!
//! A finite field exists for exactly the orders `p^m` with `p` prime. This
//! module decides primality for any `u64` and splits an order into its
//! characteristic and extension degree.

/// Witnesses that make Miller-Rabin deterministic for every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// `a * b mod m` without overflow
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `a + b mod m` without overflow
pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// `base^exp mod m` by square-and-multiply
pub(crate) fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp != 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Floor of the `k`-th root of `n`.
fn integer_root(n: u64, k: u32) -> u64 {
    if k == 1 {
        return n;
    }
    let mut r = (n as f64).powf(1.0 / k as f64) as u64;
    // The float estimate can be off by one in either direction.
    while r > 0 && r.checked_pow(k).is_none_or(|v| v > n) {
        r -= 1;
    }
    while (r + 1).checked_pow(k).is_some_and(|v| v <= n) {
        r += 1;
    }
    r
}

/// Splits `order` into `(p, m)` with `order == p^m` and `p` prime.
///
/// Returns `None` when no such decomposition exists.
pub fn prime_power(order: u64) -> Option<(u64, u32)> {
    if order < 2 {
        return None;
    }
    // Largest exponent first, so the base found is the prime itself and not
    // a composite power of it (e.g. 256 = 2^8, not 4^4 or 16^2).
    (1..u64::BITS)
        .rev()
        .map(|m| (integer_root(order, m), m))
        .find(|&(r, m)| r >= 2 && r.checked_pow(m) == Some(order) && is_prime(r))
}

/// Distinct prime divisors of `n`, by trial division. Only used on extension
/// degrees, which are below 64.
pub(crate) fn prime_divisors(mut n: u32) -> Vec<u32> {
    let mut divisors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            divisors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        divisors.push(n);
    }
    divisors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..60).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn test_large_primes() {
        assert!(is_prime(18_446_744_073_709_551_557)); // largest u64 prime
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(18_446_744_073_709_551_555));
        // Carmichael number and a strong pseudoprime to base 2
        assert!(!is_prime(561));
        assert!(!is_prime(2_047));
        assert!(!is_prime(3_215_031_751));
    }

    #[test]
    fn test_prime_power() {
        assert_eq!(prime_power(251), Some((251, 1)));
        assert_eq!(prime_power(256), Some((2, 8)));
        assert_eq!(prime_power(243), Some((3, 5)));
        assert_eq!(prime_power(2), Some((2, 1)));
        assert_eq!(prime_power(1 << 63), Some((2, 63)));
        assert_eq!(prime_power(65_537 * 65_537), Some((65_537, 2)));
        assert_eq!(prime_power(0), None);
        assert_eq!(prime_power(1), None);
        assert_eq!(prime_power(6), None);
        assert_eq!(prime_power(100), None);
        assert_eq!(prime_power(u64::MAX), None);
    }

    #[test]
    fn test_integer_root() {
        assert_eq!(integer_root(255, 8), 1);
        assert_eq!(integer_root(256, 8), 2);
        assert_eq!(integer_root(u64::MAX, 2), 4_294_967_295);
        assert_eq!(integer_root(u64::MAX, 63), 2);
    }

    #[test]
    fn test_prime_divisors() {
        assert_eq!(prime_divisors(1), Vec::<u32>::new());
        assert_eq!(prime_divisors(8), vec![2]);
        assert_eq!(prime_divisors(60), vec![2, 3, 5]);
        assert_eq!(prime_divisors(63), vec![3, 7]);
    }
}
