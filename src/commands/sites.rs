use std::io;
use std::io::prelude::*;

use bio::io::fasta::Reader;

use crate::args::SitesArgs;
use crate::common::open_file_or_stdout;
use crate::errors::*;
use crate::pam::PAM;
use crate::sites::{scan_sequence, sort_sites, write_sites, Site};

fn collect_sites<R: Read>(
    reader: Reader<R>,
    pam: &PAM,
    positions: bool,
) -> Result<(Vec<String>, Vec<Site>)> {
    let mut refseqs = Vec::new();
    let mut sites = Vec::new();

    let mut running_size = 0;
    let timer = ::std::time::Instant::now();
    for (refseq, record) in reader.records().enumerate() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        refseqs.push(record.id().to_owned());

        let sequence = record.seq().to_ascii_uppercase();
        sites.append(&mut scan_sequence(&sequence, refseq as u32, pam, positions));

        let seconds = timer.elapsed().as_secs() as usize;
        running_size += sequence.len();

        info!(
            "Processed {} ({} Mbp in {} seconds; {:.1} Mbp/s)",
            record.id(),
            running_size / 1_000_000,
            seconds,
            (running_size / 1_000_000) as f64 / ::std::cmp::max(1, seconds) as f64
        );
    }

    Ok((refseqs, sites))
}

pub fn main(args: &SitesArgs) -> Result<()> {
    let pam = PAM::cas9();

    info!("Finding {} guide sites in {:?}", pam.to_string(), &args.fasta);
    let (refseqs, mut sites) = if args.fasta == "-" {
        collect_sites(Reader::new(io::stdin()), &pam, args.positions)
    } else {
        let reader = Reader::from_file(&args.fasta)
            .chain_err(|| format!("failed to open FASTA file {:?}", args.fasta))?;

        collect_sites(reader, &pam, args.positions)
    }
    .chain_err(|| "failed to collect guide sites")?;

    info!("Sorting {} candidate guides", sites.len());
    sort_sites(&mut sites);

    let mut out = open_file_or_stdout(&args.output)?;
    let written = write_sites(&mut out, &sites, &refseqs, args.counts)?;
    out.flush().chain_err(|| "failed to flush output")?;

    info!("Wrote {} unique guides", written);

    Ok(())
}
