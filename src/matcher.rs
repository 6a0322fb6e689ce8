use rayon::prelude::*;

use crate::common::{encode_dna, TwentyMer};
use crate::errors::*;
use crate::index::ReferenceIndex;
use crate::radius::Radius;

/// The tier at which a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    SeedMiss,
    ExtensionMiss,
    FinalMiss,
    Match,
}

impl Outcome {
    pub fn is_match(self) -> bool {
        self == Outcome::Match
    }
}

/// Result of searching for a single query.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub query: String,
    pub code: TwentyMer,
    pub matched: bool,
    pub locations: Vec<String>,
}

impl Match {
    pub fn new(query: &str, code: TwentyMer, matched: bool) -> Match {
        Match {
            query: query.to_owned(),
            code,
            matched,
            locations: Vec::new(),
        }
    }
}

impl ReferenceIndex {
    /// Narrows the index to entries sharing the seed, then the extension and
    /// finally the last tier with `code`; each step searches only the range
    /// left by the previous one.
    pub fn search(&self, code: TwentyMer, radius: &Radius) -> Outcome {
        let seed = self.equal_range(0..self.len(), code, radius.seed());
        if seed.is_empty() {
            return Outcome::SeedMiss;
        }

        let extension = self.equal_range(seed, code, radius.extension());
        if extension.is_empty() {
            return Outcome::ExtensionMiss;
        }

        let last = self.equal_range(extension, code, radius.last());
        if last.is_empty() {
            Outcome::FinalMiss
        } else {
            Outcome::Match
        }
    }

    pub fn contains(&self, code: TwentyMer, radius: &Radius) -> bool {
        self.search(code, radius).is_match()
    }
}

/// Tests if any reference 20-mer agrees with `query` on its leading `radius.last()` nucleotides.
pub fn match_forward(index: &ReferenceIndex, query: &str, radius: &Radius) -> Result<bool> {
    let code =
        encode_dna(query.as_bytes()).chain_err(|| ErrorKind::InvalidQuery(query.to_owned()))?;

    Ok(index.contains(code, radius))
}

/// Searches every query in parallel; an invalid query fails on its own
/// without affecting the rest of the batch.
pub fn search_batch(
    index: &ReferenceIndex,
    queries: &[String],
    radius: &Radius,
) -> Vec<Result<Match>> {
    queries
        .par_iter()
        .map(|query| -> Result<Match> {
            let code = encode_dna(query.as_bytes())
                .chain_err(|| ErrorKind::InvalidQuery(query.clone()))?;

            Ok(Match::new(query, code, index.contains(code, radius)))
        })
        .collect()
}
