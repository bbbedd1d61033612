//! Compare two sorted kmer count tables with diff

/* std use */

/* crate use */

/* project use */
use crate::error;
use crate::tool;

/// Result of comparison
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Comparison {
    /// Same kmer with same count
    Identical,
    /// At least one kmer count differ
    Differ,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Run diff on two count tables and forward its output
///
/// diff exit with 0 if files are identical, 1 if they differ and anything else on trouble.
pub fn compare<W>(
    left: &std::path::Path,
    right: &std::path::Path,
    tools: &tool::ToolSet,
    output: &mut W,
) -> error::Result<Comparison>
where
    W: std::io::Write,
{
    let args = [left.as_os_str(), right.as_os_str()];
    let result = tool::output(tools.diff(), &args)?;

    output.write_all(&result.stdout)?;
    output.flush()?;

    match result.status.code() {
        Some(0) => Ok(Comparison::Identical),
        Some(1) => Ok(Comparison::Differ),
        _ => Err(tool::failure(tools.diff(), &args, &result).into()),
    }
}
