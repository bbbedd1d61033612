//! Error struct of project skmer_check

/* crate use */
use anyhow;
use thiserror;

/// Enum to manage error
#[derive(std::fmt::Debug, thiserror::Error)]
pub enum Error {
    /// Input stream isn't fasta or fastq format
    #[error("Input stream isn't in fasta or fastq format")]
    NotFastaOrFastq,

    /// External tool exit with a non zero status
    #[error("{tool} {} failed with exit code {}", .args.join(" "), display_code(.code))]
    ToolInvocationFailed {
        /// Name or path of tool
        tool: String,
        /// Arguments given to tool
        args: Vec<String>,
        /// Exit code, None if process was killed by a signal
        code: Option<i32>,
    },

    /// External tool can't be launched
    #[error("Can't launch {tool}")]
    ToolNotLaunched {
        /// Name or path of tool
        tool: String,
        /// Error return by spawn
        source: std::io::Error,
    },

    /// Genome isn't in fasta format
    #[error("{path} isn't in fasta format")]
    NotFasta {
        /// Path of genome
        path: std::path::PathBuf,
    },

    /// Fasta path have no extension to remove
    #[error("{path} have no extension, can't build intermediate file name")]
    NoExtension {
        /// Path of fasta
        path: std::path::PathBuf,
    },

    /// Error in logging system configuration
    #[error(transparent)]
    Log(#[from] log::SetLoggerError),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none (killed by signal)".to_string(),
    }
}

/// Alias of result
pub type Result<T> = anyhow::Result<T>;
