//! The command selector and its dispatch onto the core.

use clap::ValueEnum;
use ori_core::{
    approximate_pattern_matching, clump_finding, count_with_mismatches, decode_signed, encode,
    faster_frequent_words, frequency_array, frequent_words, frequent_words_with_mismatches,
    hamming_distance, immediate_neighbors, minimum_skew_positions, neighbors, par_clump_finding,
    pattern_count, pattern_matching, reverse_complement, skew_array, Sequence,
};
use tracing::{debug, info};

use crate::error::CliResult;
use crate::input::InputLines;
use crate::output::Output;
use crate::settings::Settings;

/// Which computation to run. The doc line of each variant lists the input
/// lines it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// text, pattern -> number of occurrences
    PatternCount,
    /// text, k -> most frequent k-mers
    FrequentWords,
    /// text, k -> most frequent k-mers via the dense frequency array
    FasterFrequentWords,
    /// text, k -> all 4^k counts in code order
    FrequencyArray,
    /// pattern -> reverse complement
    ReverseComplement,
    /// pattern, genome -> start offsets of exact matches
    PatternMatching,
    /// genome, k L t -> k-mers forming (L, t)-clumps
    ClumpFinding,
    /// genome -> skew at every index
    Skew,
    /// genome -> indices of minimum skew
    MinimumSkew,
    /// p, q -> Hamming distance
    HammingDistance,
    /// pattern, text, d -> start offsets of approximate matches
    ApproximatePatternMatching,
    /// pattern, text, d -> number of approximate occurrences
    CountWithMismatches,
    /// text, k d -> most frequent k-mers with up to d mismatches
    FrequentWordsWithMismatches,
    /// pattern, d -> the d-neighborhood
    Neighbors,
    /// pattern -> the 1-neighborhood by single substitutions
    ImmediateNeighbors,
    /// pattern -> integer code
    PatternToNumber,
    /// code, k -> pattern
    NumberToPattern,
}

fn words(patterns: Vec<Sequence>) -> Output {
    Output::Words(patterns.into_iter().map(Sequence::into_string).collect())
}

/// Runs `command` on `input`, returning the value for the output sink.
pub fn dispatch(command: Command, input: &InputLines, settings: &Settings) -> CliResult<Output> {
    info!(?command, lines = input.len(), "dispatching");
    let limits = &settings.limits;

    let output = match command {
        Command::PatternCount => {
            let text = input.sequence(0, "text")?;
            let pattern = input.sequence(1, "pattern")?;
            Output::Integer(pattern_count(&text, &pattern) as u64)
        }
        Command::FrequentWords => {
            let text = input.sequence(0, "text")?;
            let [k] = input.integers(1, ["k"])?;
            Output::Words(frequent_words(&text, k))
        }
        Command::FasterFrequentWords => {
            let text = input.sequence(0, "text")?;
            let [k] = input.integers(1, ["k"])?;
            Output::Words(faster_frequent_words(&text, k, limits)?)
        }
        Command::FrequencyArray => {
            let text = input.sequence(0, "text")?;
            let [k] = input.integers(1, ["k"])?;
            let array = frequency_array(&text, k, limits)?;
            Output::positions(array.counts().iter().copied())
        }
        Command::ReverseComplement => {
            let pattern = input.sequence(0, "pattern")?;
            Output::Words(vec![reverse_complement(&pattern).into_string()])
        }
        Command::PatternMatching => {
            let pattern = input.sequence(0, "pattern")?;
            let genome = input.sequence(1, "genome")?;
            Output::positions(pattern_matching(&pattern, &genome))
        }
        Command::ClumpFinding => {
            let genome = input.sequence(0, "genome")?;
            let [k, window, t] = input.integers(1, ["k", "L", "t"])?;
            debug!(k, window, t, parallel = settings.parallel, "clump parameters");
            let clumps = if settings.parallel {
                par_clump_finding(&genome, k, window, t)
            } else {
                clump_finding(&genome, k, window, t)
            };
            Output::Words(clumps)
        }
        Command::Skew => {
            let genome = input.sequence(0, "genome")?;
            Output::Integers(skew_array(&genome))
        }
        Command::MinimumSkew => {
            let genome = input.sequence(0, "genome")?;
            Output::positions(minimum_skew_positions(&genome))
        }
        Command::HammingDistance => {
            let p = input.sequence(0, "p")?;
            let q = input.sequence(1, "q")?;
            Output::Integer(hamming_distance(&p, &q)? as u64)
        }
        Command::ApproximatePatternMatching => {
            let pattern = input.sequence(0, "pattern")?;
            let text = input.sequence(1, "text")?;
            let [d] = input.integers(2, ["d"])?;
            Output::positions(approximate_pattern_matching(&pattern, &text, d))
        }
        Command::CountWithMismatches => {
            let pattern = input.sequence(0, "pattern")?;
            let text = input.sequence(1, "text")?;
            let [d] = input.integers(2, ["d"])?;
            Output::Integer(count_with_mismatches(&pattern, &text, d) as u64)
        }
        Command::FrequentWordsWithMismatches => {
            let text = input.sequence(0, "text")?;
            let [k, d] = input.integers(1, ["k", "d"])?;
            debug!(k, d, strand = %settings.strand, "mismatch parameters");
            Output::Words(frequent_words_with_mismatches(&text, k, d, settings.strand, limits)?)
        }
        Command::Neighbors => {
            let pattern = input.sequence(0, "pattern")?;
            let [d] = input.integers(1, ["d"])?;
            words(neighbors(&pattern, d, limits)?)
        }
        Command::ImmediateNeighbors => {
            let pattern = input.sequence(0, "pattern")?;
            words(immediate_neighbors(&pattern))
        }
        Command::PatternToNumber => {
            Output::Integer(encode(input.line(0, "pattern")?)?)
        }
        Command::NumberToPattern => {
            let code = input.signed(0, "code")?;
            let [k] = input.integers(1, ["k"])?;
            Output::Words(vec![decode_signed(code, k)?.into_string()])
        }
    };

    Ok(output)
}
