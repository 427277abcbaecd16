use std::time::Instant;

use clap::{App, Arg, value_parser};

use crate::exact_cf::exact_period;
use crate::float_cf::{DEFAULT_TERMS, float_period};
use crate::pell::pell_check;
use crate::survey::{float_mismatches, Method, pell_failures, survey, Survey};
use crate::utils::{isqrt, join_terms, non_squares};

mod utils;
mod float_cf;
mod exact_cf;
mod pell;
mod survey;

const DEFAULT_COUNT: u64 = 10000;


fn print_survey(s: &Survey, quiet: bool) {
    if !quiet {
        for r in s.results.iter() {
            println!("{}", r);
        }
    }
    if s.unresolved > 0 {
        println!("unresolved : {}", s.unresolved);
    }
}


fn main() {
    let args = App::new("sqrt-period")
        .version("1.0.0")
        .about("count the square roots whose continued fraction has an odd period")
        .arg(Arg::new("count")
            .help("the number of non-square integers to process, starting from 2")
            .takes_value(true)
            .default_value("10000")
            .value_parser(value_parser!(u64).range(1..))
            .short('c')
            .long("count"))
        .arg(Arg::new("terms")
            .help("the number of terms the float method expands before giving up")
            .takes_value(true)
            .default_value("17")
            .value_parser(value_parser!(u64).range(2..))
            .short('t')
            .long("terms"))
        .arg(Arg::new("method")
            .help("the period finder to use")
            .takes_value(true)
            .default_value("exact")
            .value_parser(["exact", "float"])
            .short('m')
            .long("method"))
        .arg(Arg::new("quiet")
            .help("only print the final count")
            .short('q')
            .long("quiet"))
        .arg(Arg::new("check")
            .help("compare the float method against the exact method")
            .long("check"))
        .arg(Arg::new("pell")
            .help("verify every exact period with its pell convergent")
            .long("pell"))
        .arg(Arg::new("time")
            .help("print the process time")
            .long("time"));

    let matches = args.get_matches();

    let count = *matches.get_one::<u64>("count").unwrap_or(&DEFAULT_COUNT) as usize;
    let terms = matches.get_one::<u64>("terms").map_or(DEFAULT_TERMS, |&t| t as usize);
    let method = match matches.get_one::<String>("method").map(|s| s.as_str()) {
        Some("float") => Method::Float { terms },
        _ => Method::Exact,
    };
    let quiet = matches.is_present("quiet");

    let start_time = Instant::now();
    let result = survey(count, method);
    print_survey(&result, quiet);

    if matches.is_present("check") {
        println!("float/exact mismatches : {}", float_mismatches(&result.results, terms).len());
    }
    if matches.is_present("pell") {
        println!("pell checks failed : {}", pell_failures(&result.results).len());
    }
    if matches.is_present("time") {
        println!("process time: {:?}", start_time.elapsed());
    }

    println!("{}", result.odd);
}
