//! Command execution, independent of the process environment.

use std::io::Write;

use randrange_core::{BoundedUniform, generate};
use tracing::{debug, instrument};

use crate::bounds::parse_range;
use crate::config::Config;
use crate::error::AppError;

/// Usage line shown for argument errors.
pub const USAGE: &str = "randrange <min> <max>";

/// Parses `args` (without the program name), draws `config.count` values
/// from `primitive` and writes them to `out`, one per line.
///
/// # Errors
///
/// Returns `AppError::Usage` for a wrong argument count, `AppError::Input`
/// for malformed bounds, `AppError::Random` if generation fails and
/// `AppError::Output` if writing fails.
#[instrument(skip(primitive, args, out), fields(count = config.count))]
pub fn run<P, I, W>(
    primitive: &mut P,
    config: &Config,
    args: I,
    out: &mut W,
) -> Result<(), AppError>
where
    P: BoundedUniform + ?Sized,
    I: IntoIterator<Item = String>,
    W: Write,
{
    let args: Vec<String> = args.into_iter().collect();
    let [min, max] = args.as_slice() else {
        return Err(AppError::Usage(USAGE.to_owned()));
    };

    let (min, max) = parse_range(min, max)?;
    debug!(min, max, "parsed range");

    for _ in 0..config.count {
        let value = generate(primitive, min, max)?;
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}
