//! Run all the verification: rebuild fasta, count both fasta, compare counts

/* std use */

/* crate use */

/* project use */
use crate::compare;
use crate::count;
use crate::error;
use crate::format;
use crate::reconstruct;
use crate::tool;

/// Remove path at end of verification, even on error, unless intermediate files are kept
fn cleaner(path: &std::path::Path, keep_intermediate: bool) -> count::Cleaner {
    if keep_intermediate {
        count::Cleaner::default()
    } else {
        count::Cleaner::new(vec![path.to_path_buf()])
    }
}

/// Log record and base counts of fasta, a parse failure is only a warning
fn log_summary(label: &str, path: &std::path::Path) {
    match format::FastaSummary::from_path(path) {
        Ok(summary) => log::info!("{} {} contains {}", label, path.display(), summary),
        Err(e) => log::warn!("Can't summarize {}: {:#}", path.display(), e),
    }
}

#[allow(clippy::too_many_arguments)]
/// Check that super-k-mers of skmer_outdir contain the same kmers, with the same count, as genome
///
/// diff output is written in output.
pub fn verify<W>(
    genome: &std::path::Path,
    skmer_outdir: &std::path::Path,
    kmer_size: u64,
    tools: &tool::ToolSet,
    tmp_dir: &std::path::Path,
    keep_intermediate: bool,
    output: &mut W,
) -> error::Result<compare::Comparison>
where
    W: std::io::Write,
{
    format::check_fasta(genome)?;
    log_summary("Genome", genome);

    log::info!("--- Build super-k-mers fasta ---");
    let skmer_fasta = reconstruct::create_skmer_fa(skmer_outdir)?;
    let _skmer_cleaner = cleaner(&skmer_fasta, keep_intermediate);
    log_summary("Super-k-mers", &skmer_fasta);

    let genome_sorted = count::count(genome, kmer_size, tools, tmp_dir)?;
    let _genome_sorted_cleaner = cleaner(&genome_sorted, keep_intermediate);

    let skmer_sorted = count::count(&skmer_fasta, kmer_size, tools, tmp_dir)?;
    let _skmer_sorted_cleaner = cleaner(&skmer_sorted, keep_intermediate);

    log::info!("--- diff origin/skmers ---");
    let comparison = compare::compare(&genome_sorted, &skmer_sorted, tools, output)?;
    log::info!("Kmer counts are {}", comparison);

    Ok(comparison)
}
