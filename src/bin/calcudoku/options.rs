use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

pub(crate) struct Options {
    input: PathBuf,
    show_candidates: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let input = matches.value_of("input").unwrap().into();
        let show_candidates = matches.is_present("show_candidates");
        Ok(Self {
            input,
            show_candidates,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn show_candidates(&self) -> bool {
        self.show_candidates
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Calcudoku")
        .help_message("Solve Calcudoku puzzles")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .required(true)
                .help("read a puzzle from a JSON file"),
        )
        .arg(
            Arg::with_name("show_candidates")
                .long("show-candidates")
                .help("print the remaining candidates if the puzzle cannot be solved"),
        )
}
