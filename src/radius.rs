use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::errors::*;

/// Length of the second search tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extension {
    Nine,
    Ten,
}

impl Extension {
    pub fn len(self) -> usize {
        match self {
            Extension::Nine => EXTENSION_SHORT,
            Extension::Ten => EXTENSION_LONG,
        }
    }
}

/// Lengths of the three tiers at which a query must agree exactly with a
/// reference sequence: the fixed seed, the extension and the final length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radius {
    extension: Extension,
    last: usize,
}

impl Radius {
    pub fn new(extension: Extension, last: usize) -> Result<Radius> {
        if last < extension.len() || last > SEQ_LEN {
            return Err(ErrorKind::InvalidRadius(format!(
                "{}_{}_{}",
                SEED_LEN,
                extension.len(),
                last
            ))
            .into());
        }

        Ok(Radius { extension, last })
    }

    /// Validates a free-form tier triple.
    pub fn from_tiers(seed: usize, extension: usize, last: usize) -> Result<Radius> {
        let invalid = || ErrorKind::InvalidRadius(format!("{}_{}_{}", seed, extension, last));

        let extension = match (seed, extension) {
            (SEED_LEN, EXTENSION_SHORT) => Extension::Nine,
            (SEED_LEN, EXTENSION_LONG) => Extension::Ten,
            _ => return Err(invalid().into()),
        };

        Self::new(extension, last)
    }

    /// The whole 20-mer, with the long extension.
    pub fn exact() -> Radius {
        Radius {
            extension: Extension::Ten,
            last: SEQ_LEN,
        }
    }

    pub fn seed(&self) -> usize {
        SEED_LEN
    }

    pub fn extension(&self) -> usize {
        self.extension.len()
    }

    pub fn last(&self) -> usize {
        self.last
    }
}

impl FromStr for Radius {
    type Err = Error;

    fn from_str(s: &str) -> Result<Radius> {
        let invalid = || ErrorKind::InvalidRadius(s.to_owned());

        let tiers = s
            .trim()
            .split('_')
            .map(|v| v.parse::<usize>())
            .collect::<::std::result::Result<Vec<_>, _>>()
            .chain_err(invalid)?;

        match tiers.as_slice() {
            &[seed, extension, last] => Self::from_tiers(seed, extension, last),
            _ => Err(invalid().into()),
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}_{}", self.seed(), self.extension(), self.last)
    }
}
