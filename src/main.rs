// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod args;
mod commands;
mod common;
mod constants;
mod errors;
mod index;
mod locations;
mod matcher;
mod pam;
mod progress;
mod radius;
mod record;
mod sites;
mod source;
mod table;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn inner_main() -> errors::Result<()> {
    let (verbosity, args) = args::parse_args()?;
    init_logging(verbosity);

    match args {
        args::Args::Sites(args) => commands::sites::main(&args),
        args::Args::Index(args) => commands::index::main(&args),
        args::Args::Search(args) => commands::search::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
