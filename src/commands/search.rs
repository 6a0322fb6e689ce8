use std::io::Write;

use crate::args::SearchArgs;
use crate::common::{open_file_or_stdin, open_file_or_stdout};
use crate::errors::*;
use crate::index::ReferenceIndex;
use crate::locations::correlate_locations;
use crate::matcher::{search_batch, Match};
use crate::source::ReferenceSource;
use crate::table;

enum Row {
    /// Offset into the list of searched queries
    Found(usize),
    Invalid,
    Header,
}

fn load_index(args: &SearchArgs) -> Result<ReferenceIndex> {
    let index = if let Some(filename) = &args.index {
        info!("Reading index from {:?}", filename);
        ReferenceIndex::read(filename)
            .chain_err(|| format!("failed to read index {:?}", filename))?
    } else {
        info!("Building index from {}", args.reference);
        ReferenceIndex::build(args.reference.open()?)
            .chain_err(|| format!("failed to build index from {}", args.reference))?
    };

    info!("  {}", index.summarize());

    Ok(index)
}

const HEADER_NAMES: &[&str] = &["query", "queries", "sequence", "guide", "target"];

/// A first row is only taken to be a header if it cannot be mistaken for a
/// malformed 20-mer.
fn is_header(value: &str) -> bool {
    HEADER_NAMES.contains(&value.to_ascii_lowercase().as_str())
        || !value.bytes().any(|nuc| b"ACGTacgt".contains(&nuc))
}

fn write_row(
    out: &mut dyn Write,
    query: &str,
    found: Option<&Match>,
    locations: bool,
) -> Result<()> {
    let matched = match found {
        Some(found) => found.matched.to_string(),
        None => "NA".into(),
    };

    write!(out, "{}\t{}", query, matched).chain_err(|| "failed to write output row")?;
    if locations {
        let tokens = match found {
            Some(found) if !found.locations.is_empty() => found.locations.join(" "),
            _ => "NA".into(),
        };

        write!(out, "\t{}", tokens).chain_err(|| "failed to write output row")?;
    }

    writeln!(out).chain_err(|| "failed to write output row")
}

pub fn main(args: &SearchArgs) -> Result<()> {
    if let Err(err) = ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        warn!("Failed to configure thread pool: {} (may already be initialized)", err);
    }

    if args.queries == "-" && args.reference == ReferenceSource::Stdin && args.index.is_none() {
        return Err("queries and reference cannot both be read from STDIN".into());
    }

    // Refuse before doing any work if locations cannot be provided
    let source = if args.locations {
        Some(args.reference.rereadable()?)
    } else {
        None
    };

    let index = load_index(args)?;

    info!("Reading queries from {:?}", args.queries);
    let queries = table::read(open_file_or_stdin(&args.queries)?)
        .chain_err(|| "failed to read table of queries")?;
    info!("  read {} queries from table.", queries.len());

    info!("Searching with radius {}", args.radius);
    let mut rows = Vec::with_capacity(queries.len());
    let mut found = Vec::new();
    for (idx, result) in search_batch(&index, &queries, &args.radius)
        .into_iter()
        .enumerate()
    {
        match result {
            Ok(query) => {
                rows.push(Row::Found(found.len()));
                found.push(query);
            }
            Err(_) if idx == 0 && is_header(&queries[idx]) => {
                info!("Treating {:?} as table header", queries[idx]);
                rows.push(Row::Header);
            }
            Err(err) => {
                warn!("{}", err);
                rows.push(Row::Invalid);
            }
        }
    }

    info!(
        "  {} of {} queries matched",
        found.iter().filter(|query| query.matched).count(),
        queries.len()
    );

    if let Some(source) = source {
        info!("Locating matches in {}", args.reference);
        correlate_locations(source, &mut found, &args.radius)?;
    }

    let header = if args.locations {
        "Query\tMatched\tLocations"
    } else {
        "Query\tMatched"
    };

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "{}", header).chain_err(|| "failed to write output header")?;

    for (query, row) in queries.iter().zip(rows) {
        match row {
            Row::Found(row) => write_row(&mut out, query, Some(&found[row]), args.locations)?,
            Row::Invalid => write_row(&mut out, query, None, args.locations)?,
            Row::Header => {}
        }
    }

    out.flush().chain_err(|| "failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_header() {
        assert!(is_header("Query"));
        assert!(is_header("SEQUENCE"));
        assert!(is_header("#id"));
        assert!(!is_header("TTTTTTTTTTTTTTTTTTTN"));
        assert!(!is_header("ACGT"));
    }
}
