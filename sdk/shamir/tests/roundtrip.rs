mod common;

use common::{binomial, seeded_rng, subsets};
use tessera_shamir::{FiniteField, ShamirScheme};

fn assert_every_subset_reveals(order: u64, k: usize, n: usize, secret: u64, seed: u64) {
    let gf = FiniteField::new(order).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let shares = scheme
        .share_with_rng(k, n, secret, &mut seeded_rng(seed))
        .unwrap();
    assert_eq!(shares.len(), n);

    let pools = subsets(&shares, k);
    assert_eq!(pools.len(), binomial(n, k));
    for pool in pools {
        assert_eq!(
            scheme.reveal(&pool).unwrap(),
            secret,
            "order {order}, k={k}, n={n}, pool {pool:?}"
        );
    }
}

#[test]
fn prime_field_scenario() {
    // 251 is prime: k=4, n=5, secret=100
    assert_every_subset_reveals(251, 4, 5, 100, 1);
}

#[test]
fn binary_field_scenario() {
    // 256 = 2^8: k=3, n=5, secret=150
    assert_every_subset_reveals(256, 3, 5, 150, 2);
}

#[test]
fn odd_extension_field() {
    // 243 = 3^5
    assert_every_subset_reveals(243, 3, 6, 200, 3);
}

#[test]
fn many_parameters_and_fields() {
    let mut seed = 100;
    for order in [7, 13, 251, 65_537, 16, 256, 1 << 20, 9, 243, 4_294_967_291] {
        let max_n = 6.min(order as usize - 1);
        for n in 1..=max_n {
            for k in 1..=n {
                for secret in [0, 1, order - 1, order / 2] {
                    seed += 1;
                    assert_every_subset_reveals(order, k, n, secret, seed);
                }
            }
        }
    }
}

#[test]
fn threshold_one_every_share_is_the_secret() {
    let gf = FiniteField::new(251).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let shares = scheme.share(1, 5, 42).unwrap();

    for share in &shares {
        assert_eq!(share.y, 42);
        assert_eq!(scheme.reveal(&[*share]).unwrap(), 42);
    }
}

#[test]
fn threshold_equals_share_count() {
    assert_every_subset_reveals(251, 5, 5, 100, 4);
    assert_every_subset_reveals(256, 5, 5, 150, 5);
}

#[test]
fn more_than_k_shares_still_reveal() {
    let gf = FiniteField::new(256).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let shares = scheme.share(3, 8, 77).unwrap();

    for m in 3..=8 {
        assert_eq!(scheme.reveal(&shares[..m]).unwrap(), 77);
    }
}

#[test]
fn share_order_does_not_matter() {
    let gf = FiniteField::new(251).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let shares = scheme.share(3, 5, 9).unwrap();

    let pool = [shares[4], shares[1], shares[3]];
    assert_eq!(scheme.reveal(&pool).unwrap(), 9);
}

#[test]
fn largest_prime_field() {
    let p = 18_446_744_073_709_551_557;
    let gf = FiniteField::new(p).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let secret = p - 2;
    let shares = scheme
        .share_with_rng(3, 5, secret, &mut seeded_rng(9))
        .unwrap();
    assert_eq!(scheme.reveal(&shares[2..]).unwrap(), secret);
}

#[test]
fn largest_binary_field() {
    let gf = FiniteField::new(1 << 63).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let secret = 0x7FFF_0000_FFFF_0001;
    let shares = scheme
        .share_with_rng(3, 4, secret, &mut seeded_rng(10))
        .unwrap();
    assert_eq!(scheme.reveal(&shares[1..]).unwrap(), secret);
}

#[test]
fn same_seed_same_shares() {
    let gf = FiniteField::new(251).unwrap();
    let scheme = ShamirScheme::new(&gf);

    let a = scheme.share_with_rng(4, 5, 100, &mut seeded_rng(42)).unwrap();
    let b = scheme.share_with_rng(4, 5, 100, &mut seeded_rng(42)).unwrap();
    let c = scheme.share_with_rng(4, 5, 100, &mut seeded_rng(43)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn fresh_polynomial_per_call() {
    let gf = FiniteField::new(65_537).unwrap();
    let scheme = ShamirScheme::new(&gf);
    let mut rng = seeded_rng(8);

    let first = scheme.share_with_rng(3, 5, 1234, &mut rng).unwrap();
    let second = scheme.share_with_rng(3, 5, 1234, &mut rng).unwrap();

    assert_ne!(first, second);
    assert_eq!(scheme.reveal(&first[..3]).unwrap(), 1234);
    assert_eq!(scheme.reveal(&second[2..]).unwrap(), 1234);
}

#[test]
fn concurrent_use_of_one_scheme() {
    let gf = FiniteField::new(256).unwrap();
    let scheme = ShamirScheme::new(&gf);

    std::thread::scope(|s| {
        for t in 0..4u64 {
            s.spawn(move || {
                let mut rng = seeded_rng(1000 + t);
                for secret in 0..64 {
                    let shares = scheme.share_with_rng(3, 5, secret, &mut rng).unwrap();
                    assert_eq!(scheme.reveal(&shares[2..]).unwrap(), secret);
                }
            });
        }
    });
}
