//! Command Line Interface declaration of project skmer_check

/* std use */

/* crate use */

/* project use */
use crate::tool;

fn parse_kmer_size(value: &str) -> std::result::Result<u64, String> {
    let kmer_size: u64 = value
        .parse()
        .map_err(|_| format!("{} isn't a positive integer", value))?;

    if kmer_size == 0 {
        Err("kmer size must be greater than 0".to_string())
    } else {
        Ok(kmer_size)
    }
}

/// Check that super-k-mer buckets contain exactly the k-mers of the original genome
#[derive(clap::Parser, std::fmt::Debug)]
#[clap(name = "skmer_check", version = "0.1")]
pub struct Command {
    /* Specifique option */
    /// Fasta file of original genome
    genome: std::path::PathBuf,

    /// Directory that contains super-k-mer buckets (one <minimizer>.txt per bucket)
    skmer_outdir: std::path::PathBuf,

    /// Size of kmer counted
    #[clap(value_parser = parse_kmer_size)]
    kmer_size: u64,

    /// Path to kmc executable
    #[clap(long = "kmc", default_value = "kmc")]
    kmc: std::path::PathBuf,

    /// Path to kmc_dump executable
    #[clap(long = "kmc-dump", default_value = "kmc_dump")]
    kmc_dump: std::path::PathBuf,

    /// Path to sort executable
    #[clap(long = "sort", default_value = "sort")]
    sort: std::path::PathBuf,

    /// Path to diff executable
    #[clap(long = "diff", default_value = "diff")]
    diff: std::path::PathBuf,

    /// Temporary directory used by kmc
    #[clap(short = 't', long = "tmp-dir", default_value = "/tmp")]
    tmp_dir: std::path::PathBuf,

    /// Keep reconstructed fasta and sorted kmer counts
    #[clap(short = 'K', long = "keep-intermediate")]
    keep_intermediate: bool,

    /* General option */
    /// Silence all output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Verbose mode (-v, -vv, etc), progress is shown without it
    #[clap(short = 'v', long = "verbosity", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Timestamp (sec, ms, ns, none)
    #[clap(short = 'T', long = "timestamp")]
    ts: Option<stderrlog::Timestamp>,
}

impl Command {
    /// Get genome path
    pub fn genome(&self) -> &std::path::Path {
        &self.genome
    }

    /// Get super-k-mer directory path
    pub fn skmer_outdir(&self) -> &std::path::Path {
        &self.skmer_outdir
    }

    /// Get kmer size
    pub fn kmer_size(&self) -> u64 {
        self.kmer_size
    }

    /// Get external tools
    pub fn tools(&self) -> tool::ToolSet {
        tool::ToolSet::new(
            self.kmc.clone(),
            self.kmc_dump.clone(),
            self.sort.clone(),
            self.diff.clone(),
        )
    }

    /// Get kmc temporary directory
    pub fn tmp_dir(&self) -> &std::path::Path {
        &self.tmp_dir
    }

    /// Get keep_intermediate
    pub fn keep_intermediate(&self) -> bool {
        self.keep_intermediate
    }

    /// Get verbosity level, info is the default level
    pub fn verbosity(&self) -> usize {
        self.verbosity as usize + 2
    }

    /// Get quiet
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Get timestamp granularity
    pub fn timestamp(&self) -> stderrlog::Timestamp {
        self.ts.unwrap_or(stderrlog::Timestamp::Off)
    }
}
