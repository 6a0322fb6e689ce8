use std::io::BufRead;

use crate::errors::*;

/// Reads the first column of a tab-separated table, skipping blank lines.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut column = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| format!("error reading line {} from table", idx + 1))?;
        if let Some(value) = line.split('\t').next() {
            let value = value.trim();
            if !value.is_empty() {
                column.push(value.to_owned());
            }
        }
    }

    Ok(column)
}
