use std::fmt;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Write};

use crate::constants::SEQ_LEN;
use crate::errors::*;

const INVALID: u8 = 0xFF;
const DECODING: &[u8; 4] = b"ACGT";

lazy_static! {
    static ref ENCODING: [u8; 256] = {
        let mut table = [INVALID; 256];

        for (code, nucs) in [b"Aa", b"Cc", b"Gg", b"Tt"].iter().enumerate() {
            for &nuc in nucs.iter() {
                table[nuc as usize] = code as u8;
            }
        }

        table
    };
}

/// A 20-mer packed two bits per nucleotide, first nucleotide in the most
/// significant position. Comparing two codes compares the sequences in
/// lexicographic (A < C < G < T) order.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct TwentyMer(pub u64);

impl TwentyMer {
    pub fn new(code: u64) -> TwentyMer {
        TwentyMer(code)
    }

    /// The code restricted to its leading `len` nucleotides.
    pub fn prefix(self, len: usize) -> u64 {
        debug_assert!(len <= SEQ_LEN, "prefix length {} out of range", len);

        self.0 >> (2 * (SEQ_LEN - len))
    }

    pub fn decode(self) -> String {
        (0..SEQ_LEN)
            .map(|idx| {
                let shift = 2 * (SEQ_LEN - idx - 1);

                DECODING[((self.0 >> shift) & 3) as usize] as char
            })
            .collect()
    }
}

impl fmt::Display for TwentyMer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

pub fn encode_dna(seq: &[u8]) -> Result<TwentyMer> {
    let invalid = || ErrorKind::InvalidSymbol(String::from_utf8_lossy(seq).into_owned());
    if seq.len() != SEQ_LEN {
        return Err(invalid().into());
    }

    let mut encoded_dna = 0;
    for &nuc in seq {
        let code = ENCODING[nuc as usize];
        if code == INVALID {
            return Err(invalid().into());
        }

        encoded_dna = (encoded_dna << 2) | u64::from(code);
    }

    Ok(TwentyMer::new(encoded_dna))
}

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::BufWriter::new(io::stdout())))
    }
}

pub fn open_file_or_stdin(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let handle = File::open(path).chain_err(|| format!("could not open file {:?}", path))?;

        Ok(Box::new(BufReader::new(handle)))
    }
}
