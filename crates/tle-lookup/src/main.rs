//! TLE Lookup CLI
//!
//! Decodes a local TLE listing and prints one satellite's element set.
//!
//! Usage:
//!   tle-lookup --file active.txt get "ISS (ZARYA)"
//!   tle-lookup --file active.txt --skip-malformed list

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use satellite_catalog::{
    BuildPolicy, CatalogConfig, DecodeOptions, FileSource, SatelliteCatalog,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "tle-lookup",
    about = "Look up decoded two-line element sets by satellite name"
)]
struct Args {
    /// Path to a TLE listing (name, line 1, line 2 per satellite)
    #[arg(short, long, default_value = "active.txt")]
    file: PathBuf,

    /// Skip element sets that fail to decode instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Verify line numbers and checksums
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one satellite's element set as JSON
    Get {
        /// Exact satellite name, e.g. "ISS (ZARYA)"
        name: String,
    },
    /// Print every satellite name, sorted
    List,
}

impl Args {
    fn catalog_config(&self) -> CatalogConfig {
        let policy = if self.skip_malformed {
            BuildPolicy::SkipMalformed
        } else {
            BuildPolicy::FailFast
        };
        let decode = if self.strict {
            DecodeOptions::strict()
        } else {
            DecodeOptions::default()
        };
        CatalogConfig::new().policy(policy).decode_options(decode)
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let source = FileSource::new(&args.file);
    let catalog = SatelliteCatalog::from_source(&source, &args.catalog_config())
        .with_context(|| format!("failed to load catalog from {:?}", args.file))?;

    match &args.command {
        Command::Get { name } => {
            let record = catalog.get(name)?;
            serde_json::to_writer_pretty(&mut *out, record)?;
            writeln!(out)?;
        }
        Command::List => {
            let mut names: Vec<&str> = catalog.names().collect();
            names.sort_unstable();
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Loading {:?}", args.file);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use satellite_catalog::CatalogError;
    use tempfile::NamedTempFile;

    const LISTING: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
TESTSAT-2
1 20580U 90037B   24001.50000000  .00001000  00000-0  50000-4 0  9996
2 20580  28.4700 100.0000 0002500  90.0000 270.0000 15.10000000 12341
";

    fn listing_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn run_with(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_get_prints_json() {
        let file = listing_file(LISTING);
        let path = file.path().to_str().unwrap();

        let output = run_with(&["tle-lookup", "--file", path, "get", "ISS (ZARYA)"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["name"], "ISS (ZARYA)");
        assert_eq!(json["elements"]["inclination_deg"], 51.6416);
    }

    #[test]
    fn test_list_is_sorted() {
        let file = listing_file(LISTING);
        let path = file.path().to_str().unwrap();

        let output = run_with(&["tle-lookup", "-f", path, "list"]).unwrap();
        assert_eq!(output, "ISS (ZARYA)\nTESTSAT-2\n");
    }

    #[test]
    fn test_unknown_satellite() {
        let file = listing_file(LISTING);
        let path = file.path().to_str().unwrap();

        let err = run_with(&["tle-lookup", "-f", path, "get", "HUBBLE"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::SatelliteNotFound(_))
        ));
    }

    #[test]
    fn test_skip_malformed_flag() {
        let broken = LISTING.replace("0006703", "00067x3");
        let file = listing_file(&broken);
        let path = file.path().to_str().unwrap();

        assert!(run_with(&["tle-lookup", "-f", path, "list"]).is_err());

        let output = run_with(&["tle-lookup", "-f", path, "--skip-malformed", "list"]).unwrap();
        assert_eq!(output, "TESTSAT-2\n");
    }

    #[test]
    fn test_strict_flag() {
        let args = Args::try_parse_from(["tle-lookup", "--strict", "list"]).unwrap();
        assert_eq!(args.catalog_config().decode, DecodeOptions::strict());
        assert_eq!(args.catalog_config().policy, BuildPolicy::FailFast);
    }
}
