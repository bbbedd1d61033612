//! Define function to generate sequence value use for test and benchmarking

/* std use */

/* crate use */
use rand::prelude::*;

/* project use */
use crate::common::constant;

/// Generate a RNG with constant::SEED
pub fn rng() -> rand::rngs::StdRng {
    rand::rngs::StdRng::from_seed(constant::SEED)
}

/// Generate a random DNA sequence with constant::SEQUENCE_ALPHABET
pub fn seq(rng: &mut rand::rngs::StdRng, seq_length: u64) -> Vec<u8> {
    (0..seq_length)
        .map(|_| *constant::SEQUENCE_ALPHABET.choose(rng).unwrap())
        .collect::<Vec<u8>>()
}

/// Generate a random minimizer with constant::MINIMIZER_ALPHABET
pub fn minimizer(rng: &mut rand::rngs::StdRng, length: u64) -> String {
    (0..length)
        .map(|_| *constant::MINIMIZER_ALPHABET.choose(rng).unwrap() as char)
        .collect::<String>()
}

#[allow(dead_code)]
/// Generate a random in ram fasta with RNG, one line by sequence
pub fn fasta(rng: &mut rand::rngs::StdRng, seq_length: u64, seq_number: u64) -> Vec<u8> {
    let mut output = Vec::with_capacity(
        (
            seq_length * seq_number // sequence space
		+ seq_number * 3 // '>' and jump line space
		+ (seq_number.checked_ilog10().unwrap_or(0) as u64 + 1) * seq_number
            // sequence id space
        ) as usize,
    );

    for index in 0..seq_number {
        // Header
        output.extend(b">");
        output.extend(index.to_string().as_bytes());
        output.extend(b"\n");
        // Sequence
        output.extend(seq(rng, seq_length));
        output.extend(b"\n");
    }

    output
}

/// Split a sequence in super-k-mers, consecutive super-k-mers overlap by k - 1 bases
pub fn skmers(rng: &mut rand::rngs::StdRng, sequence: &[u8], kmer_size: usize) -> Vec<Vec<u8>> {
    let mut output = Vec::new();

    if sequence.len() < kmer_size {
        return output;
    }

    let nb_kmer = sequence.len() - kmer_size + 1;
    let mut first_kmer = 0;
    while first_kmer < nb_kmer {
        let kmer_in_skmer = rng.gen_range(1..=kmer_size).min(nb_kmer - first_kmer);
        let end = first_kmer + kmer_in_skmer + kmer_size - 1;

        output.push(sequence[first_kmer..end].to_vec());
        first_kmer += kmer_in_skmer;
    }

    output
}

#[allow(dead_code)]
/// Generate buckets content from a fasta generate by fasta function, blank lines are randomly inserted
pub fn buckets(
    rng: &mut rand::rngs::StdRng,
    fasta: &[u8],
    kmer_size: usize,
    bucket_number: usize,
) -> Vec<(String, Vec<u8>)> {
    let mut names = std::collections::BTreeSet::new();
    while names.len() < bucket_number {
        names.insert(minimizer(rng, 8));
    }

    let mut output: Vec<(String, Vec<u8>)> =
        names.into_iter().map(|name| (name, Vec::new())).collect();

    for line in fasta.split(|c| *c == b'\n') {
        if line.is_empty() || line[0] == b'>' {
            continue;
        }

        for skmer in skmers(rng, line, kmer_size) {
            let content = &mut output.choose_mut(rng).unwrap().1;

            content.extend(&skmer);
            content.extend(b"\n");
            if rng.gen_bool(0.1) {
                content.extend(b"\n");
            }
        }
    }

    output
}
