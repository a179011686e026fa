//! Interactive URL prompt.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Asks for a URL on `output` and reads one line from `input`, trimmed.
/// End of input yields an empty string.
pub fn read_url(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    writeln!(
        output,
        "Enter an image URL (e.g., \"https://example.com/picture.jpg\"):"
    )?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}
