//! Prints the magic numbers for dividing by a constant.

use log::{LevelFilter, debug, error};
use magic_div::{Divisor, Error, HexGrouped, MagicSet, WideDivisor};
use num_traits::AsPrimitive;
use simple_logger::SimpleLogger;
use std::{ffi::OsString, fmt::Display, process::ExitCode};

const USAGE: &str = "\
Usage: magicdiv [--wide] [--verbose] [--] <divisor>

Prints the magic numbers for dividing by <divisor>, a decimal integer in
[-2**31, 2**32 - 1], or [-2**63, 2**64 - 1] with --wide.

Options:
  -w, --wide       compute constants for 64-bit words
  -v, --verbose    log the folded divisor words
  -h, --help       print this message
";

struct Options {
    wide: bool,
    verbose: bool,
    divisor: String,
}

fn parse_args() -> Result<Option<Options>, pico_args::Error> {
    let mut argv: Vec<OsString> = std::env::args_os().skip(1).collect();

    // Everything after `--` is positional, so negative divisors can follow it.
    let trailing = match argv.iter().position(|a| a == "--") {
        Some(i) => {
            let trailing = argv.split_off(i + 1);
            argv.pop();
            trailing
        }
        None => Vec::new(),
    };

    let mut args = pico_args::Arguments::from_vec(argv);

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let wide = args.contains(["-w", "--wide"]);
    let verbose = args.contains(["-v", "--verbose"]);

    let mut free = args.finish();
    free.extend(trailing);
    if free.len() > 1 {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments {:?}", &free[1..]),
        });
    }
    let divisor = free
        .pop()
        .ok_or(pico_args::Error::MissingArgument)?
        .into_string()
        .map_err(|_| pico_args::Error::NonUtf8Argument)?;

    Ok(Some(Options {
        wide,
        verbose,
        divisor,
    }))
}

/// Message shown to the user for a rejected divisor.
fn rejection(err: Error, wide: bool) -> &'static str {
    match err {
        Error::InvalidInput => "Enter a valid decimal integer, optionally signed.",
        Error::DegenerateDivisor => "Divisor cannot be 0, +1, or -1.",
        Error::OutOfRange if wide => "Divisor must be in the range -2**63 to 2**64 - 1.",
        Error::OutOfRange => "Divisor must be in the range -2**31 to 2**32 - 1.",
        Error::EvenDivisor => "Divisor must be odd.",
    }
}

/// Prints every constant, each multiplier as the unsigned value of its bit pattern.
fn report<S, U>(set: &MagicSet<S, U>)
where
    S: AsPrimitive<U>,
    U: 'static + Copy + Display,
    HexGrouped<U>: Display,
{
    match &set.signed {
        Some(m) => {
            let mul: U = m.multiplier().as_();
            println!("signed magic:    {mul}, hex {}", HexGrouped(mul));
            println!("signed shift:    {}", m.shift());
        }
        None => {
            println!("signed magic:    Nonexistent");
            println!("signed shift:    Nonexistent");
        }
    }

    let m = &set.unsigned;
    let mul = m.multiplier();
    println!("unsigned magic:  {mul}, hex {}", HexGrouped(mul));
    println!("unsigned shift:  {}", m.shift());
    println!("unsigned add:    {}", u8::from(m.add()));

    match set.inverse {
        Some(inv) => println!("inverse:         {inv}, hex {}", HexGrouped(inv)),
        None => println!("inverse:         Nonexistent"),
    }
}

fn run(options: &Options) -> Result<(), Error> {
    if options.wide {
        let d: WideDivisor = options.divisor.parse()?;
        debug!(
            "divisor {d}: signed word {}, unsigned word {}",
            d.to_signed(),
            d.to_unsigned()
        );
        report(&d.magic()?);
    } else {
        let d: Divisor = options.divisor.parse()?;
        debug!(
            "divisor {d}: signed word {}, unsigned word {}",
            d.to_signed(),
            d.to_unsigned()
        );
        report(&d.magic()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(Some(options)) => options,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("magicdiv: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("magicdiv: cannot initialize logging: {e}");
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", rejection(err, options.wide));
            ExitCode::FAILURE
        }
    }
}
