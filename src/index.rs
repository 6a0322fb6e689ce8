use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::ops::Range;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::common::TwentyMer;
use crate::constants::*;
use crate::errors::*;
use crate::progress;
use crate::record::Records;

/// Sorted packed 20-mers of a reference genome. Built once and only read
/// afterwards, so a single index may be shared by any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceIndex {
    codes: Vec<TwentyMer>,
}

impl ReferenceIndex {
    /// Builds an index from reference records sorted by 20-mer. Malformed or
    /// out-of-order records abort the build.
    pub fn build<R: BufRead>(reader: R) -> Result<ReferenceIndex> {
        let mut records = Records::new(reader);
        let mut codes: Vec<TwentyMer> = Vec::new();

        while let Some(record) = records.next_record()? {
            if let Some(&last) = codes.last() {
                if record.code() < last {
                    return Err(ErrorKind::IngestionError(
                        record.line(),
                        format!("{} sorts before preceding {}", record.code(), last),
                    )
                    .into());
                }
            }

            codes.push(record.code());
        }

        codes.shrink_to_fit();

        Ok(ReferenceIndex { codes })
    }

    pub fn from_codes(codes: Vec<TwentyMer>) -> Result<ReferenceIndex> {
        if let Some(idx) = codes.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(format!("20-mers are not sorted at entry {}", idx + 1).into());
        }

        Ok(ReferenceIndex { codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[TwentyMer] {
        &self.codes
    }

    /// First position in `range` whose leading `len` nucleotides are not less than `prefix`.
    pub fn lower_bound(&self, range: Range<usize>, prefix: u64, len: usize) -> usize {
        let start = range.start;

        start + self.codes[range].partition_point(|code| code.prefix(len) < prefix)
    }

    /// First position in `range` whose leading `len` nucleotides are greater than `prefix`.
    pub fn upper_bound(&self, range: Range<usize>, prefix: u64, len: usize) -> usize {
        let start = range.start;

        start + self.codes[range].partition_point(|code| code.prefix(len) <= prefix)
    }

    /// Sub-range of `range` agreeing with `code` on its leading `len` nucleotides.
    pub fn equal_range(&self, range: Range<usize>, code: TwentyMer, len: usize) -> Range<usize> {
        let prefix = code.prefix(len);
        let start = self.lower_bound(range.clone(), prefix, len);
        let end = self.upper_bound(start..range.end, prefix, len);

        start..end
    }

    pub fn read<P: AsRef<Path> + Debug>(filename: &P) -> Result<ReferenceIndex> {
        let file = File::open(filename).chain_err(|| "failed to open index file")?;
        let file_size = file
            .metadata()
            .chain_err(|| "failed to read index file metadata")?
            .len();
        let mut reader = BufReader::new(file);
        let mut buffer = Vec::new();

        reader
            .by_ref()
            .take(INDEX_HEADER.len() as u64)
            .read_to_end(&mut buffer)
            .chain_err(|| "failed to read index header")?;
        if buffer != INDEX_HEADER {
            return Err("file is not a valid offtarget index file".into());
        }

        let version = reader
            .read_u8()
            .chain_err(|| "failed to read index version number")?;
        if version < INDEX_VERSION {
            return Err("index file is outdated; please re-index reference".into());
        } else if version > INDEX_VERSION {
            return Err("index generated using newer version of offtarget; \
                        please upgrade offtarget or re-index reference"
                .into());
        }

        let count = reader
            .read_u64::<LittleEndian>()
            .chain_err(|| "failed to read number of 20-mers")?;

        // Header, version byte and count precede the codes
        let offset = INDEX_HEADER.len() as u64 + 1 + 8;
        match count.checked_mul(8) {
            Some(size) if size == file_size.saturating_sub(offset) => {}
            _ => {
                return Err(Error::from(format!(
                    "index lists {} 20-mers but holds {} bytes of data",
                    count,
                    file_size.saturating_sub(offset)
                )))
                .chain_err(|| "index file is corrupt");
            }
        }

        let progress = progress::default(count as usize);
        let mut codes = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let code = reader
                .read_u64::<LittleEndian>()
                .chain_err(|| "failed to read 20-mer")?;

            codes.push(TwentyMer::new(code));
            progress.inc(1);
        }

        progress.finish_and_clear();

        Self::from_codes(codes).chain_err(|| "index file is corrupt")
    }

    pub fn write<P: AsRef<Path> + Debug>(&self, filename: P) -> Result<()> {
        let file = File::create(filename).chain_err(|| "failed to create index file")?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(INDEX_HEADER)
            .chain_err(|| "failed to write index header")?;
        writer
            .write_u8(INDEX_VERSION)
            .chain_err(|| "failed to write index version")?;
        writer
            .write_u64::<LittleEndian>(self.codes.len() as u64)
            .chain_err(|| "failed to write number of 20-mers")?;

        for code in &self.codes {
            writer
                .write_u64::<LittleEndian>(code.0)
                .chain_err(|| "failed to write 20-mer")?;
        }

        writer.flush().chain_err(|| "failed to flush index file")
    }

    pub fn summarize(&self) -> String {
        let unique = if self.codes.is_empty() {
            0
        } else {
            1 + self
                .codes
                .windows(2)
                .filter(|pair| pair[0] != pair[1])
                .count()
        };

        format!(
            "Index contains {} 20-mers ({} unique)",
            self.codes.len(),
            unique
        )
    }
}
