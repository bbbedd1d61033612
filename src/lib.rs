//! Check that super-k-mer buckets contain exactly the k-mers of the original genome

#![warn(missing_docs)]

/* std use */

/* crate use */

/* project use */

/* mod declaration */
pub mod cli;
pub mod compare;
pub mod count;
pub mod error;
pub mod format;
pub mod reconstruct;
pub mod tool;
pub mod verify;

/* pub use */
pub use compare::Comparison;
pub use verify::verify;
