extern crate clap;
extern crate serde_json;

mod wktify;
use wktify::error::Error;
use wktify::reader;
use wktify::text;

use clap::App;
use std::process;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn run() -> Result<(), Error> {
    reader::pipe_stdio()
}

fn main() {
    App::new("wktify")
        .version(VERSION)
        .about("wktify - rewrite lat/lon location fields as WKT points")
        .after_help(text::MAIN_AFTER_HELP)
        .get_matches();

    if let Err(e) = run() {
        eprintln!("Application error: {:?}", e);
        process::exit(1);
    }
}
