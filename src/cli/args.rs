use crate::models::errors::{GenError, GenResult};

pub const USAGE: &str = "\
Usage: galaxygen [OPTIONS]

Prints a randomly generated galaxy dataset as JSON.

Options:
  -s, --seed <INT>  Seed for the random number generator
  -h, --help        Print help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub help: bool,
}

/// Parse the process arguments.
pub fn parse() -> GenResult<Args> {
    parse_from(std::env::args().skip(1))
}

/// Parse arguments, excluding the program name.
pub fn parse_from<I, S>(args: I) -> GenResult<Args>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--seed" | "-s" => {
                let val = iter.next().ok_or_else(|| {
                    GenError::InvalidArgument("--seed requires a value".to_string())
                })?;
                let seed = val.as_ref().parse::<u64>().map_err(|e| {
                    GenError::InvalidArgument(format!("seed '{}': {}", val.as_ref(), e))
                })?;
                parsed.seed = Some(seed);
            }
            "--help" | "-h" => {
                parsed.help = true;
                return Ok(parsed);
            }
            other => {
                return Err(GenError::InvalidArgument(format!("unknown argument: {}", other)));
            }
        }
    }

    Ok(parsed)
}
