//! Constant use in test and benchmark

/// Seed use by all random generator
pub const SEED: [u8; 32] = [42; 32];

/// Alphabet of generated sequences
pub const SEQUENCE_ALPHABET: &[u8] = b"ACGT";

/// Alphabet of generated bucket identifier
pub const MINIMIZER_ALPHABET: &[u8] = b"ACGT";

/// kmc replacement: count forward kmer of single line fasta with awk, the table is write in database prefix file
#[allow(dead_code)]
pub const FAKE_KMC: &[u8] = b"#!/bin/sh
k=${1#-k}
awk -v k=\"$k\" '!/^>/ { for (i = 1; i + k - 1 <= length($0); i++) c[substr($0, i, k)]++ } END { for (m in c) print m \"\\t\" c[m] }' \"$4\" > \"$5.kmc_pre\"
touch \"$5.kmc_suf\"
";

/// kmc_dump replacement: copy table write by FAKE_KMC
#[allow(dead_code)]
pub const FAKE_KMC_DUMP: &[u8] = b"#!/bin/sh
cat \"$2.kmc_pre\" > \"$3\"
";
