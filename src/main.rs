//! Check that super-k-mer buckets contain exactly the k-mers of the original genome

#![warn(missing_docs)]

/* std use */

/* crate use */
use clap::Parser as _;

/* project use */
use skmer_check::cli;
use skmer_check::error;
use skmer_check::Comparison;

/// Exit status when kmer counts differ, same as diff
const DIFFER_STATUS: u8 = 1;

/// Exit status on error, same as diff
const ERROR_STATUS: u8 = 2;

fn run(params: &cli::Command) -> error::Result<Comparison> {
    // Setup logger
    stderrlog::new()
        .module(module_path!())
        .quiet(params.quiet())
        .verbosity(params.verbosity())
        .timestamp(params.timestamp())
        .init()
        .map_err(error::Error::Log)?;

    log::info!("Start verification");
    let comparison = skmer_check::verify(
        params.genome(),
        params.skmer_outdir(),
        params.kmer_size(),
        &params.tools(),
        params.tmp_dir(),
        params.keep_intermediate(),
        &mut std::io::stdout().lock(),
    )?;
    log::info!("End verification");

    Ok(comparison)
}

fn main() -> std::process::ExitCode {
    // parse cli
    let params = cli::Command::parse();

    match run(&params) {
        Ok(Comparison::Identical) => std::process::ExitCode::SUCCESS,
        Ok(Comparison::Differ) => std::process::ExitCode::from(DIFFER_STATUS),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            std::process::ExitCode::from(ERROR_STATUS)
        }
    }
}
