use std::fmt::Display;
use std::io::Write;

use crate::error::AppError;

/// Write one line of data to stdout. This is the only thing the calling
/// pipeline reads, so nothing else goes there.
pub fn print_line(value: impl Display) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    stdout.flush()?;
    Ok(())
}

pub fn print_error(err: &AppError) {
    if let AppError::InvalidPayload { payload, .. } = err {
        eprintln!("{}", payload);
    }
    eprintln!("Error: {}", err);
    if err.is_usage() {
        eprintln!();
        eprintln!("{}", USAGE_HINT);
    }
}

const USAGE_HINT: &str = "Possible commands:
  power
  brightness

Run 'zigbee-light --help' for details.";
