use std::io::Write;

use bio::alphabets::dna;
use bio_types::strand::Strand;
use rayon::prelude::*;

use crate::common::{encode_dna, TwentyMer};
use crate::constants::*;
use crate::errors::*;
use crate::pam::PAM;

/// 1-based leftmost coordinate of a guide on the forward strand of a contig.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Position {
    refseq: u32,
    pos: u32,
    forward: bool,
}

impl Position {
    pub fn forward(refseq: u32, pos: u32) -> Position {
        Position {
            refseq,
            pos,
            forward: true,
        }
    }

    pub fn reverse(refseq: u32, pos: u32) -> Position {
        Position {
            refseq,
            pos,
            forward: false,
        }
    }

    pub fn refseq(&self) -> u32 {
        self.refseq
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn strand(&self) -> Strand {
        if self.forward {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    /// Location token as written to the reference, e.g. `chr1:1042:+`.
    pub fn to_token(&self, refseqs: &[String]) -> String {
        format!(
            "{}:{}:{}",
            refseqs[self.refseq as usize],
            self.pos,
            self.strand().strand_symbol()
        )
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Site {
    pub code: TwentyMer,
    pub position: Option<Position>,
}

/// Guides encoded by a guide + PAM window. `N`s inside the guide are expanded
/// into every concrete nucleotide; windows with more than `MAX_N` `N`s, or
/// with symbols other than A, C, G, T and N, yield nothing.
pub fn guide_variants(window: &[u8], pam: &PAM) -> Vec<TwentyMer> {
    if window.len() != SEQ_LEN + pam.len() || !pam.matches(window) {
        return Vec::new();
    }

    if window.iter().filter(|&&nuc| nuc == b'N').count() > MAX_N {
        return Vec::new();
    }

    let guide = &window[..SEQ_LEN];
    if !guide.iter().all(|nuc| b"ACGTN".contains(nuc)) {
        return Vec::new();
    }

    let wildcards: Vec<usize> = guide
        .iter()
        .enumerate()
        .filter(|&(_, &nuc)| nuc == b'N')
        .map(|(idx, _)| idx)
        .collect();

    let mut buffer = guide.to_owned();
    let num_variants = 1usize << (2 * wildcards.len());
    let mut guides = Vec::with_capacity(num_variants);
    for variant in 0..num_variants {
        for (nth, &idx) in wildcards.iter().enumerate() {
            buffer[idx] = b"ACGT"[(variant >> (2 * nth)) & 3];
        }

        if let Ok(code) = encode_dna(&buffer) {
            guides.push(code);
        }
    }

    guides
}

fn collect_forward_sites(sequence: &[u8], pam: &PAM, mut add: impl FnMut(usize, TwentyMer)) {
    for (idx, window) in sequence.windows(SEQ_LEN + pam.len()).enumerate() {
        for code in guide_variants(window, pam) {
            add(idx, code);
        }
    }
}

/// Finds guides followed by `pam` on either strand of an upper-case sequence.
pub fn scan_sequence(sequence: &[u8], refseq: u32, pam: &PAM, positions: bool) -> Vec<Site> {
    let position = |pos: Position| if positions { Some(pos) } else { None };

    let (mut forward, mut reverse) = rayon::join(
        || {
            let mut sites = Vec::new();
            collect_forward_sites(sequence, pam, |idx, code| {
                let pos = Position::forward(refseq, idx as u32 + 1);

                sites.push(Site {
                    code,
                    position: position(pos),
                })
            });

            sites
        },
        || {
            let mut sites = Vec::new();
            let revcomp = dna::revcomp(sequence);
            collect_forward_sites(&revcomp, pam, |idx, code| {
                let pos = Position::reverse(refseq, (sequence.len() - idx - SEQ_LEN + 1) as u32);

                sites.push(Site {
                    code,
                    position: position(pos),
                })
            });

            sites
        },
    );

    forward.append(&mut reverse);
    forward
}

pub fn sort_sites(sites: &mut Vec<Site>) {
    sites.par_sort_unstable();
}

/// Writes one record per unique guide of sorted `sites`, optionally followed
/// by the number of occurrences and by one token per position. Returns the
/// number of records written.
pub fn write_sites(
    out: &mut dyn Write,
    sites: &[Site],
    refseqs: &[String],
    counts: bool,
) -> Result<usize> {
    let mut records = 0;
    let mut start = 0;

    while start < sites.len() {
        let code = sites[start].code;
        let end = start
            + sites[start..]
                .iter()
                .take_while(|site| site.code == code)
                .count();

        write!(out, "{}", code).chain_err(|| "failed to write guide")?;
        if counts {
            write!(out, "\t{}", end - start).chain_err(|| "failed to write guide count")?;
        }

        for site in &sites[start..end] {
            if let Some(position) = &site.position {
                write!(out, "\t{}", position.to_token(refseqs))
                    .chain_err(|| "failed to write guide position")?;
            }
        }

        writeln!(out).chain_err(|| "failed to write guide")?;

        records += 1;
        start = end;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_position_is_forward_coordinate() {
        // CCN followed by the reverse complement of the guide
        let guide = b"ACGTGGTGGCAATGCACGGT";
        let mut sequence = b"GACCA".to_vec();
        sequence.extend(dna::revcomp(&guide[..]));

        let sites = scan_sequence(&sequence, 0, &PAM::cas9(), true);
        let expected = Site {
            code: encode_dna(guide).unwrap(),
            position: Some(Position::reverse(0, 6)),
        };

        assert!(sites.contains(&expected));
    }
}
