#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tessera_shamir::Share;

pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// All size-`k` subsets of `shares`, in lexicographic order of indices.
pub fn subsets(shares: &[Share], k: usize) -> Vec<Vec<Share>> {
    fn extend(
        shares: &[Share],
        k: usize,
        start: usize,
        current: &mut Vec<Share>,
        out: &mut Vec<Vec<Share>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..shares.len() {
            current.push(shares[i]);
            extend(shares, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(shares, k, 0, &mut Vec::with_capacity(k), &mut out);
    out
}

pub fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
