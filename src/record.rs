use std::io::BufRead;
use std::str::SplitWhitespace;

use crate::common::{encode_dna, TwentyMer};
use crate::errors::*;

/// A line of the reference: a 20-mer followed by opaque location tokens.
pub struct Record<'a> {
    line: usize,
    code: TwentyMer,
    fields: SplitWhitespace<'a>,
}

impl<'a> Record<'a> {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn code(&self) -> TwentyMer {
        self.code
    }

    pub fn locations(self) -> impl Iterator<Item = &'a str> {
        self.fields
    }
}

/// Sequential reader of reference records; blank lines are skipped.
pub struct Records<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Records<R> {
        Records {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn lines(&self) -> usize {
        self.line
    }

    /// Returns the next record, or `None` once the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<Record<'_>>> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .chain_err(|| ErrorKind::IngestionError(self.line + 1, "read failed".into()))?;
            if read == 0 {
                return Ok(None);
            }

            self.line += 1;
            if !self.buffer.trim().is_empty() {
                break;
            }
        }

        let mut fields = self.buffer.split_whitespace();
        let seq = fields.next().unwrap_or("");
        let code = encode_dna(seq.as_bytes())
            .chain_err(|| ErrorKind::IngestionError(self.line, format!("{:?}", seq)))?;

        Ok(Some(Record {
            line: self.line,
            code,
            fields,
        }))
    }
}
