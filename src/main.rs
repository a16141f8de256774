#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

//! Checker for the "Panorama Trace Mission" challenge set.
//!
//! Walks through every challenge, submits the exact winning coordinates and
//! prints the concatenated flag. The base URL can be overridden via the
//! `PTM_URL` environment variable (defaults to the publicly deployed
//! instance).

use std::process;

mod answers;
mod checker;
mod config;

fn main() {
    match checker::run() {
        Ok(flag) => println!("{}", flag),
        Err(err) => {
            eprintln!("[checker] error: {:#}", err);
            process::exit(1);
        }
    }
}
