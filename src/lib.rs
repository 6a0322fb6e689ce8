// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod args;
pub mod commands;
pub mod common;
pub mod constants;
pub mod errors;
pub mod index;
pub mod locations;
pub mod matcher;
pub mod pam;
pub mod progress;
pub mod radius;
pub mod record;
pub mod sites;
pub mod source;
pub mod table;
