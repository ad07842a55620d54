mod demo;

use std::env;

use anyhow::{Context, Result, bail};
use tessera_config::TesseraConfig;
use tessera_field::FiniteField;
use tessera_shamir::{ShamirScheme, Share};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let cmd = &args[1];

    let result = match cmd.as_str() {
        "share" => load_options(&args[2..]).and_then(|opts| share(&opts)),
        "reveal" => load_options(&args[2..]).and_then(|opts| reveal(&opts)),
        "demo" => load_options(&args[2..]).and_then(|opts| demo::run(&opts.config)),
        "config" => {
            print!("{}", TesseraConfig::generate_sample());
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            println!("❌ Unknown command: {}", cmd);
            println!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Tessera CLI - Shamir (k,n)-threshold secret sharing");
    println!();
    println!("USAGE:");
    println!("  tessera <command> [options] [args]");
    println!();
    println!("COMMANDS:");
    println!("  share <secret>             Split a secret into n shares");
    println!("  reveal <share>...          Reconstruct a secret from shares like \"(1, 185)\"");
    println!("  demo                       Walk through sharing, blending and reconstruction");
    println!("  config                     Print a sample configuration file");
    println!("  help                       Show this help message");
    println!();
    println!("OPTIONS:");
    println!("  --order <q>                Field order, prime or prime power (default: 251)");
    println!("  --k <k>                    Shares needed to reveal (default: 4)");
    println!("  --n <n>                    Shares produced (default: 5)");
    println!();
    println!("EXAMPLES:");
    println!("  tessera share 100                          # 5 shares, any 4 reveal 100");
    println!("  tessera share 150 --order 256 --k 3        # over GF(2^8)");
    println!("  tessera reveal \"(1, 185)\" \"(2, 101)\" ...   # reconstruct");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("  TESSERA_CONFIG       Path to a config file");
    println!("  TESSERA_ORDER        Field order");
    println!("  TESSERA_THRESHOLD    Threshold k");
    println!("  TESSERA_SHARES       Share count n");
    println!("  RUST_LOG             Log level (debug/info/warn/error)");
}

/// Parsed command line on top of the loaded configuration
#[derive(Debug)]
struct Options {
    config: TesseraConfig,
    positional: Vec<String>,
}

fn load_options(args: &[String]) -> Result<Options> {
    let config = TesseraConfig::load().context("Failed to load configuration")?;
    parse_args(args, config)
}

fn parse_args(args: &[String], mut config: TesseraConfig) -> Result<Options> {
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--order" | "--k" | "--n" => {
                let value = args
                    .get(i + 1)
                    .with_context(|| format!("{flag} needs a value"))?;
                let parse_err = || format!("{flag} expects a number, got {value:?}");
                match flag {
                    "--order" => config.field.order = value.parse().with_context(parse_err)?,
                    "--k" => config.scheme.threshold = value.parse().with_context(parse_err)?,
                    _ => config.scheme.shares = value.parse().with_context(parse_err)?,
                }
                i += 1;
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    Ok(Options { config, positional })
}

fn build_field(config: &TesseraConfig) -> Result<FiniteField> {
    let order = config.field.order;
    FiniteField::new(order).with_context(|| format!("Cannot build field of order {order}"))
}

fn share(opts: &Options) -> Result<()> {
    let [secret] = opts.positional.as_slice() else {
        bail!("Usage: share <secret> [--order q] [--k k] [--n n]");
    };
    let secret: u64 = secret
        .parse()
        .with_context(|| format!("Secret must be a non-negative integer, got {secret:?}"))?;

    let field = build_field(&opts.config)?;
    let scheme = ShamirScheme::new(&field);
    let (k, n) = (opts.config.scheme.threshold, opts.config.scheme.shares);

    log::info!("Sharing over GF({}) with k={k}, n={n}", field.order());
    for share in scheme.share(k, n, secret)? {
        println!("{share}");
    }
    Ok(())
}

fn reveal(opts: &Options) -> Result<()> {
    if opts.positional.is_empty() {
        bail!("Usage: reveal <share>... [--order q]");
    }
    let shares = opts
        .positional
        .iter()
        .map(|s| s.parse::<Share>())
        .collect::<Result<Vec<_>, _>>()?;

    let field = build_field(&opts.config)?;
    let scheme = ShamirScheme::new(&field);

    log::info!("Revealing over GF({}) from {} shares", field.order(), shares.len());
    println!("{}", scheme.reveal(&shares)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags_override_config() {
        let opts = parse_args(
            &args(&["150", "--order", "256", "--k", "3", "--n", "6"]),
            TesseraConfig::default(),
        )
        .unwrap();

        assert_eq!(opts.positional, vec!["150"]);
        assert_eq!(opts.config.field.order, 256);
        assert_eq!(opts.config.scheme.threshold, 3);
        assert_eq!(opts.config.scheme.shares, 6);
    }

    #[test]
    fn test_parse_keeps_config_defaults() {
        let opts = parse_args(&args(&["(1, 185)", "(2, 101)"]), TesseraConfig::default()).unwrap();
        assert_eq!(opts.positional.len(), 2);
        assert_eq!(opts.config, TesseraConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse_args(&args(&["--k"]), TesseraConfig::default()).is_err());
        assert!(parse_args(&args(&["--order", "big"]), TesseraConfig::default()).is_err());
    }

    #[test]
    fn test_build_field_rejects_composite_order() {
        let mut config = TesseraConfig::default();
        config.field.order = 100;
        assert!(build_field(&config).is_err());
    }
}
