use crate::utils::error::{BrickError, Result};
use std::io::{BufRead, Write};

/// Writes `message` to `output` and reads one line from `input`, without the
/// trailing newline. End of input is reported as an `IoError`.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BrickError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "standard input closed before a value was entered",
        )));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parses a whole number, tolerating surrounding whitespace.
pub fn parse_dimension(field_name: &str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| BrickError::InvalidInput {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
