use std::fmt;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::errors::*;

/// A reference that can be read again from the first record, as many times
/// as needed. Each call returns an independent reader.
pub trait Rereadable {
    fn reopen(&self) -> Result<Box<dyn BufRead + '_>>;
}

impl Rereadable for PathBuf {
    fn reopen(&self) -> Result<Box<dyn BufRead + '_>> {
        let file =
            File::open(self).chain_err(|| format!("failed to open reference {:?}", self))?;

        Ok(Box::new(BufReader::new(file)))
    }
}

impl Rereadable for Vec<u8> {
    fn reopen(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.as_slice()))
    }
}

/// Where reference records come from. Files can be re-read, which is needed
/// for locating matches; standard input is consumed by building the index.
#[derive(Clone, Debug, PartialEq)]
pub enum ReferenceSource {
    File(PathBuf),
    Stdin,
}

impl ReferenceSource {
    pub fn parse(value: &str) -> Result<ReferenceSource> {
        if value == "-" {
            return Ok(ReferenceSource::Stdin);
        }

        match value.find("://") {
            Some(idx) if &value[..idx] == "file" => {
                Ok(ReferenceSource::File(PathBuf::from(&value[idx + 3..])))
            }
            Some(idx) => Err(format!(
                "unsupported reference scheme {:?}; download the reference and pass a path",
                &value[..idx]
            )
            .into()),
            None => Ok(ReferenceSource::File(PathBuf::from(value))),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            ReferenceSource::File(path) => {
                let file =
                    File::open(path).chain_err(|| format!("failed to open reference {:?}", path))?;

                Ok(Box::new(BufReader::new(file)))
            }
            ReferenceSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }

    pub fn is_rereadable(&self) -> bool {
        match self {
            ReferenceSource::File(_) => true,
            ReferenceSource::Stdin => false,
        }
    }

    pub fn rereadable(&self) -> Result<&dyn Rereadable> {
        match self {
            ReferenceSource::File(path) => Ok(path as &dyn Rereadable),
            ReferenceSource::Stdin => Err(ErrorKind::CapabilityUnavailable(self.to_string()).into()),
        }
    }
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReferenceSource::File(path) => write!(f, "{:?}", path),
            ReferenceSource::Stdin => f.write_str("standard input"),
        }
    }
}
