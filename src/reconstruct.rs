//! Rebuild a fasta file from super-k-mer bucket files

/* std use */
use std::io::BufRead as _;
use std::io::Write as _;

/* crate use */
use anyhow::Context as _;

/* project use */
use crate::error;

/// Suffix of bucket file, name without suffix is the minimizer
pub const BUCKET_SUFFIX: &str = ".txt";

/// Name of reconstructed fasta, created in bucket directory
pub const SKMER_FASTA: &str = "all_skmers.fa";

/// A bucket file and its identifier
#[derive(std::fmt::Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    id: String,
    path: std::path::PathBuf,
}

impl Bucket {
    /// Build a Bucket from a path, None if file name doesn't end with BUCKET_SUFFIX
    pub fn from_path(path: std::path::PathBuf) -> Option<Self> {
        let id = path
            .file_name()?
            .to_str()?
            .strip_suffix(BUCKET_SUFFIX)?
            .to_string();

        Some(Self { id, path })
    }

    /// Get bucket identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get bucket path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// List bucket files of directory, in directory listing order
pub fn bucket_files<P>(dir: P) -> error::Result<Vec<Bucket>>
where
    P: AsRef<std::path::Path>,
{
    let dir = dir.as_ref();
    let mut buckets = Vec::new();

    for entry in
        std::fs::read_dir(dir).with_context(|| format!("Can't list {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Can't list {}", dir.display()))?;

        if entry.file_type()?.is_dir() {
            continue;
        }

        if let Some(bucket) = Bucket::from_path(entry.path()) {
            buckets.push(bucket);
        } else if entry.file_name().to_str().is_none()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(BUCKET_SUFFIX)
        {
            log::warn!(
                "Skip {}, bucket file name isn't valid UTF-8",
                entry.path().display()
            );
        }
    }

    Ok(buckets)
}

/// Write one fasta record by non empty line of bucket, return number of record
///
/// Lines end with `\n`, `\r\n` or `\r`.
pub fn write_bucket<W>(bucket: &Bucket, output: &mut W) -> error::Result<u64>
where
    W: std::io::Write,
{
    let input = std::io::BufReader::new(
        std::fs::File::open(bucket.path())
            .with_context(|| format!("Can't open {}", bucket.path().display()))?,
    );

    let mut skmer_idx = 0;
    for line in input.lines() {
        let line = line.with_context(|| format!("Can't read {}", bucket.path().display()))?;

        // a lone '\r' is also a line end
        for skmer in line.split('\r').map(str::trim) {
            if skmer.is_empty() {
                continue;
            }

            writeln!(output, ">{}-{}\n{}", bucket.id(), skmer_idx, skmer)?;
            skmer_idx += 1;
        }
    }

    Ok(skmer_idx)
}

/// Write records of all buckets, return total number of record
pub fn write_skmer_fasta<W>(buckets: &[Bucket], output: &mut W) -> error::Result<u64>
where
    W: std::io::Write,
{
    let mut nb_record = 0;

    for bucket in buckets {
        let nb_skmer = write_bucket(bucket, output)?;
        log::debug!("bucket {} contains {} super-k-mers", bucket.id(), nb_skmer);

        nb_record += nb_skmer;
    }

    Ok(nb_record)
}

/// Create (or overwrite) SKMER_FASTA in outdir with all super-k-mers of outdir buckets
pub fn create_skmer_fa<P>(outdir: P) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let outdir = outdir.as_ref();
    let fasta_path = outdir.join(SKMER_FASTA);

    let buckets = bucket_files(outdir)?;
    log::info!("Found {} buckets in {}", buckets.len(), outdir.display());

    let mut output = std::io::BufWriter::new(
        std::fs::File::create(&fasta_path)
            .with_context(|| format!("Can't create {}", fasta_path.display()))?,
    );

    let nb_record = write_skmer_fasta(&buckets, &mut output)?;
    output
        .flush()
        .with_context(|| format!("Can't write {}", fasta_path.display()))?;

    log::info!("Write {} super-k-mers in {}", nb_record, fasta_path.display());

    Ok(fasta_path)
}
