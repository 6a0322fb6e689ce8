use crate::common::TwentyMer;
use crate::errors::*;
use crate::matcher::Match;
use crate::radius::Radius;
use crate::record::Records;
use crate::source::Rereadable;

/// Fills in the location tokens of every matched query by a single merge-join
/// pass over a fresh read of the reference, which must be sorted the same way
/// as the index built from it. Records are paired with queries on the leading
/// `radius.last()` nucleotides; `matches` keeps its order. Below 20 that
/// includes near matches: every record agreeing with the query on those
/// nucleotides contributes its tokens, not only an identical 20-mer.
pub fn correlate_locations(
    source: &dyn Rereadable,
    matches: &mut [Match],
    radius: &Radius,
) -> Result<()> {
    let len = radius.last();
    let mut order: Vec<usize> = (0..matches.len())
        .filter(|&idx| matches[idx].matched)
        .collect();
    order.sort_by_key(|&idx| matches[idx].code);

    let reader = source
        .reopen()
        .chain_err(|| ErrorKind::CorrelationError("could not re-read reference".into()))?;
    let mut records = Records::new(reader);
    let mut previous: Option<TwentyMer> = None;
    // A record read past the current query, kept for the next one
    let mut pending: Option<(TwentyMer, Vec<String>)> = None;
    let mut group: Option<(u64, Vec<String>)> = None;

    for idx in order {
        let query = &mut matches[idx];
        let prefix = query.code.prefix(len);

        if let Some((group_prefix, tokens)) = &group {
            if *group_prefix == prefix {
                query.locations = tokens.clone();
                continue;
            }
        }

        let mut found = false;
        let mut tokens = Vec::new();
        loop {
            if let Some((code, locations)) = pending.take() {
                let record_prefix = code.prefix(len);
                if record_prefix > prefix {
                    pending = Some((code, locations));
                    break;
                } else if record_prefix == prefix {
                    found = true;
                    tokens.extend(locations);
                }

                continue;
            }

            let record = match records.next_record().chain_err(|| {
                ErrorKind::CorrelationError("reference could not be re-read".into())
            })? {
                Some(record) => record,
                None => break,
            };

            let code = record.code();
            if let Some(last) = previous {
                if code < last {
                    return Err(ErrorKind::CorrelationError(format!(
                        "reference is not sorted; {} at line {} follows {}",
                        code,
                        record.line(),
                        last
                    ))
                    .into());
                }
            }
            previous = Some(code);

            let record_prefix = code.prefix(len);
            if record_prefix == prefix {
                found = true;
                tokens.extend(record.locations().map(str::to_owned));
            } else if record_prefix > prefix {
                pending = Some((code, record.locations().map(str::to_owned).collect()));
                break;
            }
        }

        if !found {
            return Err(ErrorKind::CorrelationError(format!(
                "no reference record agrees with {} at radius {} (read {} lines)",
                query.query,
                radius,
                records.lines()
            ))
            .into());
        }

        debug!("{} found at {} location(s)", query.query, tokens.len());
        query.locations = tokens.clone();
        group = Some((prefix, tokens));
    }

    Ok(())
}
