use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use crate::errors::*;
use crate::radius::Radius;
use crate::source::ReferenceSource;

pub const REFERENCE_ENV: &str = "OFFTARGET_REFERENCE";

#[derive(Debug)]
pub struct SitesArgs {
    pub fasta: String,
    pub output: Option<String>,
    pub counts: bool,
    pub positions: bool,
}

#[derive(Debug)]
pub struct IndexArgs {
    pub reference: ReferenceSource,
    pub output: Option<String>,
}

#[derive(Debug)]
pub struct SearchArgs {
    pub reference: ReferenceSource,
    pub index: Option<String>,
    pub queries: String,
    pub output: Option<String>,
    pub radius: Radius,
    pub locations: bool,
    pub threads: usize,
}

pub enum Args {
    Sites(SitesArgs),
    Index(IndexArgs),
    Search(SearchArgs),
    None,
}

fn sites_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("sites")
        .about("Write sorted list of Cas9 guide 20-mers found in a FASTA genome")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file to scan for NGG guide sites; '-' for STDIN.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output file; STDOUT if not set."))
        .arg(
            Arg::with_name("counts")
                .long("counts")
                .help("Append the number of times each guide occurs"),
        )
        .arg(
            Arg::with_name("positions")
                .long("positions")
                .help("Append contig:position:strand of each occurrence (greatly increases output size)"),
        )
}

fn index_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("index")
        .about("Build binary index from sorted list of guide 20-mers")
        .arg(
            Arg::with_name("reference")
                .help("Sorted list of 20-mers, as written by 'sites'; '-' for STDIN.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output file; defaults to <reference>.offtarget"))
}

fn search_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("search")
        .about("Report which 20-mers in a table match the reference")
        .arg(
            Arg::with_name("queries")
                .help("Table with one 20-mer in the first column of each row; '-' for STDIN.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output file; STDOUT if not set."))
        .arg(
            Arg::with_name("reference")
                .long("reference")
                .short("r")
                .takes_value(true)
                .env(REFERENCE_ENV)
                .help("Sorted list of 20-mers, as written by 'sites'; '-' for STDIN."),
        )
        .arg(
            Arg::with_name("index")
                .long("index")
                .takes_value(true)
                .help("Binary index built by 'index' from the same reference."),
        )
        .arg(
            Arg::with_name("radius")
                .long("radius")
                .takes_value(true)
                .default_value("5_10_20")
                .help("Tiers to match as 5_9_x (9 <= x <= 20) or 5_10_x (10 <= x <= 20)."),
        )
        .arg(
            Arg::with_name("locations")
                .long("locations")
                .help("Report reference locations of matches; requires a reference file"),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_reference(matches: &ArgMatches) -> Result<ReferenceSource> {
    let value = get_str(matches, "reference").chain_err(|| {
        format!(
            "reference must be given with --reference or the {} environment variable",
            REFERENCE_ENV
        )
    })?;

    ReferenceSource::parse(value)
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

/// Returns the requested verbosity (number of -v flags) and the command.
pub fn parse_args() -> Result<(u64, Args)> {
    let matches = App::new("offtarget")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mikkel Schubert")
        .about("Screen CRISPR guide 20-mers for exact off-target matches in a genome")
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Increase logging verbosity; may be repeated"),
        )
        .subcommand(sites_command())
        .subcommand(index_command())
        .subcommand(search_command())
        .get_matches();

    // -v may be given before or after the subcommand
    let verbosity = match matches.subcommand() {
        (_, Some(sub)) => sub.occurrences_of("verbose"),
        (_, None) => 0,
    }
    .max(matches.occurrences_of("verbose"));

    let args = if let Some(matches) = matches.subcommand_matches("sites") {
        Args::Sites(SitesArgs {
            fasta: get_string(matches, "fasta")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            counts: matches.is_present("counts"),
            positions: matches.is_present("positions"),
        })
    } else if let Some(matches) = matches.subcommand_matches("index") {
        Args::Index(IndexArgs {
            reference: ReferenceSource::parse(get_str(matches, "reference")?)?,
            output: matches.value_of("output").map(|s| s.to_string()),
        })
    } else if let Some(matches) = matches.subcommand_matches("search") {
        Args::Search(SearchArgs {
            reference: get_reference(matches)?,
            index: matches.value_of("index").map(|s| s.to_string()),
            queries: get_string(matches, "queries")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            radius: get_str(matches, "radius")?.parse()?,
            locations: matches.is_present("locations"),
            threads: parse_threads(matches)?,
        })
    } else {
        eprintln!("{}", matches.usage());

        Args::None
    };

    Ok((verbosity, args))
}
