//! Detect format of file and summarize fasta content

/* std use */

/* crate use */
use anyhow::Context as _;

/* project use */
use crate::error;

/// List available reads format
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ReadsFormat {
    /// Fasta format
    #[default]
    Fasta,
    /// Fastq format
    Fastq,
}

impl std::fmt::Display for ReadsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ReadsFormat {
    /// Detect format of file by read the first byte
    pub fn detect<R>(input: &mut R) -> error::Result<Self>
    where
        R: std::io::Read,
    {
        let mut first_byte: [u8; 1] = [0];

        input.read_exact(&mut first_byte)?;

        match first_byte {
            [b'>'] => Ok(Self::Fasta),
            [b'@'] => Ok(Self::Fastq),
            _ => Err(error::Error::NotFastaOrFastq.into()),
        }
    }
}

/// Open a possibly compressed file
pub fn reader<P>(path: P) -> error::Result<std::io::BufReader<Box<dyn std::io::Read>>>
where
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let file =
        std::fs::File::open(path).with_context(|| format!("Can't open {}", path.display()))?;

    Ok(std::io::BufReader::new(niffler::get_reader(Box::new(file))?.0))
}

/// Return an error if file isn't a fasta, kmc is run in multi-fasta mode
pub fn check_fasta<P>(path: P) -> error::Result<()>
where
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let file =
        std::fs::File::open(path).with_context(|| format!("Can't open {}", path.display()))?;

    let not_fasta = || error::Error::NotFasta {
        path: path.to_path_buf(),
    };

    // niffler refuse too short stream
    let mut input = match niffler::get_reader(Box::new(file)) {
        Ok((input, _)) => input,
        Err(_) => return Err(not_fasta().into()),
    };

    match ReadsFormat::detect(&mut input) {
        Ok(ReadsFormat::Fasta) => Ok(()),
        Ok(ReadsFormat::Fastq) => Err(not_fasta().into()),
        Err(e) if e.is::<error::Error>() => Err(not_fasta().into()),
        Err(e)
            if e.downcast_ref::<std::io::Error>()
                .map(|io| io.kind() == std::io::ErrorKind::UnexpectedEof)
                .unwrap_or(false) =>
        {
            Err(not_fasta().into())
        }
        Err(e) => Err(e),
    }
}

/// Number of records and bases of a fasta file
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct FastaSummary {
    records: u64,
    bases: u64,
}

impl FastaSummary {
    /// Read all record of a fasta stream
    pub fn from_stream<R>(input: R) -> error::Result<Self>
    where
        R: std::io::BufRead,
    {
        let mut reader = noodles::fasta::Reader::new(input);
        let mut summary = Self::default();

        for result in reader.records() {
            let record = result?;

            summary.records += 1;
            summary.bases += record.sequence().len() as u64;
        }

        Ok(summary)
    }

    /// Read all record of a fasta file
    pub fn from_path<P>(path: P) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let path = path.as_ref();

        Self::from_stream(reader(path)?).with_context(|| format!("Can't parse {}", path.display()))
    }

    /// Get number of records
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Get number of bases
    pub fn bases(&self) -> u64 {
        self.bases
    }
}

impl std::fmt::Display for FastaSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} records, {} bases", self.records, self.bases)
    }
}
