//! Sharing walk-through
//!
//! Splits one secret twice and shows that any k shares reveal it, and that
//! shares can be combined point by point without ever revealing anything.

use anyhow::{Context, Result};
use tessera_config::TesseraConfig;
use tessera_field::{FieldElement, FiniteField};
use tessera_shamir::{ShamirScheme, Share};

const DEMO_SECRET: u64 = 100;
const DEMO_OFFSET: u64 = 80;
const DEMO_FACTOR: u64 = 3;

pub fn run(config: &TesseraConfig) -> Result<()> {
    let field = crate::build_field(config)?;
    let scheme = ShamirScheme::new(&field);
    let (k, n) = (config.scheme.threshold, config.scheme.shares);

    println!("Field: GF({}), k = {k}, n = {n}", field.order());
    println!("Original Secret: {DEMO_SECRET}");

    let shares1 = scheme.share(k, n, DEMO_SECRET)?;
    println!("Shares1: {}", format_shares(&shares1));
    let shares2 = scheme.share(k, n, DEMO_SECRET)?;
    println!("Shares2: {}", format_shares(&shares2));

    let pool = &shares1[..k];
    report(&scheme, "Shares1", pool)?;
    let pool = &shares2[..k];
    report(&scheme, "Shares2", pool)?;

    let blended = shares1
        .iter()
        .zip(&shares2)
        .take(k)
        .map(|(a, b)| -> Result<Share> {
            let y = field.element(a.y)? + field.element(b.y)?;
            Ok(Share::new(a.x, y.value()))
        })
        .collect::<Result<Vec<_>>>()?;
    report(&scheme, "Shares1 + Shares2", &blended)?;

    let offset = demo_constant(&field, DEMO_OFFSET)?;
    let shifted = map_values(&field, &shares1[..k], |y| y + offset)?;
    report(&scheme, &format!("Shares1 + {DEMO_OFFSET}"), &shifted)?;

    let factor = demo_constant(&field, DEMO_FACTOR)?;
    let scaled = map_values(&field, &shares1[..k], |y| y * factor)?;
    report(&scheme, &format!("Shares1 * {DEMO_FACTOR}"), &scaled)?;

    Ok(())
}

fn demo_constant(field: &FiniteField, value: u64) -> Result<FieldElement<'_>> {
    field
        .element(value)
        .with_context(|| format!("Demo constant {value} does not fit GF({})", field.order()))
}

/// Rewrites every y value with `f`, keeping the evaluation points.
fn map_values<'f>(
    field: &'f FiniteField,
    shares: &[Share],
    f: impl Fn(FieldElement<'f>) -> FieldElement<'f>,
) -> Result<Vec<Share>> {
    shares
        .iter()
        .map(|s| -> Result<Share> {
            let y = f(field.element(s.y)?);
            Ok(Share::new(s.x, y.value()))
        })
        .collect()
}

fn report(scheme: &ShamirScheme<'_>, label: &str, pool: &[Share]) -> Result<()> {
    let secret = scheme.reveal(pool)?;
    println!(
        "Reconstruct with {label} {}. Reconstructed Secret: {secret}",
        format_shares(pool)
    );
    Ok(())
}

/// `[(1, 185), (2, 101)]`
fn format_shares(shares: &[Share]) -> String {
    let items: Vec<String> = shares.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shares() {
        let shares = [Share::new(1, 185), Share::new(2, 101)];
        assert_eq!(format_shares(&shares), "[(1, 185), (2, 101)]");
    }

    #[test]
    fn test_map_values() {
        let field = FiniteField::new(251).unwrap();
        let three = field.element(3).unwrap();
        let shares = [Share::new(1, 100), Share::new(2, 200)];
        let mapped = map_values(&field, &shares, |y| y * three).unwrap();
        assert_eq!(mapped, vec![Share::new(1, 49), Share::new(2, 98)]);
    }

    #[test]
    fn test_run_with_defaults() {
        run(&TesseraConfig::default()).unwrap();
    }

    #[test]
    fn test_run_in_binary_field() {
        let mut config = TesseraConfig::default();
        config.field.order = 256;
        config.scheme.threshold = 3;
        run(&config).unwrap();
    }
}
