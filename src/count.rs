//! Count kmer of a fasta with kmc and produce a sorted count table

/* std use */

/* crate use */

/* project use */
use crate::error;
use crate::tool;

/// Remove fasta extension, `genome.fa` give `genome`
pub fn base_name<P>(fasta: P) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let fasta = fasta.as_ref();

    if fasta.extension().is_none() {
        return Err(error::Error::NoExtension {
            path: fasta.to_path_buf(),
        }
        .into());
    }

    Ok(fasta.with_extension(""))
}

/// Paths of files generated around a base name
#[derive(std::fmt::Debug, Clone, PartialEq, Eq)]
pub struct Intermediates {
    base: std::path::PathBuf,
}

impl Intermediates {
    /// Intermediate files of a fasta file
    pub fn from_fasta<P>(fasta: P) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self {
            base: base_name(fasta)?,
        })
    }

    /// Prefix of kmc database
    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    /// kmc prefix file
    pub fn kmc_pre(&self) -> std::path::PathBuf {
        self.with_suffix("kmc_pre")
    }

    /// kmc suffix file
    pub fn kmc_suf(&self) -> std::path::PathBuf {
        self.with_suffix("kmc_suf")
    }

    /// kmc_dump output
    pub fn counts(&self) -> std::path::PathBuf {
        self.with_suffix("counts")
    }

    /// sort output
    pub fn sorted(&self) -> std::path::PathBuf {
        self.with_suffix("sorted")
    }

    fn with_suffix(&self, suffix: &str) -> std::path::PathBuf {
        let mut name = self.base.clone().into_os_string();
        name.push(".");
        name.push(suffix);

        name.into()
    }
}

/// Remove files when dropped, missing files are ignored
#[derive(std::fmt::Debug, Default)]
pub struct Cleaner {
    paths: Vec<std::path::PathBuf>,
}

impl Cleaner {
    /// Create a Cleaner for paths
    pub fn new(paths: Vec<std::path::PathBuf>) -> Self {
        Self { paths }
    }

    /// Forget all paths, nothing will be removed
    pub fn disarm(&mut self) {
        self.paths.clear();
    }
}

impl Drop for Cleaner {
    fn drop(&mut self) {
        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => log::debug!("Remove {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
                Err(e) => log::warn!("Can't remove {}: {}", path.display(), e),
            }
        }
    }
}

/// Build kmc argument: forward strand only and keep kmer seen once
pub fn kmc_args(
    fasta: &std::path::Path,
    kmer_size: u64,
    intermediates: &Intermediates,
    tmp_dir: &std::path::Path,
) -> Vec<std::ffi::OsString> {
    vec![
        format!("-k{}", kmer_size).into(),
        "-fm".into(),
        "-ci0".into(),
        fasta.into(),
        intermediates.base().into(),
        tmp_dir.into(),
    ]
}

/// Build kmc_dump argument
pub fn kmc_dump_args(intermediates: &Intermediates) -> Vec<std::ffi::OsString> {
    vec![
        "-ci0".into(),
        intermediates.base().into(),
        intermediates.counts().into(),
    ]
}

/// Build sort argument
pub fn sort_args(intermediates: &Intermediates) -> Vec<std::ffi::OsString> {
    vec![
        intermediates.counts().into(),
        "-o".into(),
        intermediates.sorted().into(),
    ]
}

/// Count kmer of fasta, return path of sorted count table
///
/// kmc database and unsorted counts are removed even if a step fails.
pub fn count<P>(
    fasta: P,
    kmer_size: u64,
    tools: &tool::ToolSet,
    tmp_dir: &std::path::Path,
) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let fasta = fasta.as_ref();
    let intermediates = Intermediates::from_fasta(fasta)?;

    let cleaner = Cleaner::new(vec![
        intermediates.kmc_pre(),
        intermediates.kmc_suf(),
        intermediates.counts(),
    ]);

    log::info!("--- Counting kmers of {} ---", fasta.display());
    tool::run(
        tools.kmc(),
        &kmc_args(fasta, kmer_size, &intermediates, tmp_dir),
    )?;

    log::info!("--- Dumping kmers ---");
    tool::run(tools.kmc_dump(), &kmc_dump_args(&intermediates))?;

    log::info!("--- Sorting kmers ---");
    let mut sorted_cleaner = Cleaner::new(vec![intermediates.sorted()]);
    tool::run(tools.sort(), &sort_args(&intermediates))?;
    sorted_cleaner.disarm();

    log::info!("--- Cleaning ---");
    drop(cleaner);

    Ok(intermediates.sorted())
}
