//! Interactive yes/no prompting.

use std::io::{self, BufRead, Write};

/// Ask `question` until the answer starts with y, Y, n or N.
///
/// Returns `true` for yes. End of input counts as no.
pub fn ask_yes_or_no<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        write!(output, "{}", question)?;
        output.flush()?;

        let mut response = String::new();
        if input.read_line(&mut response)? == 0 {
            return Ok(false);
        }

        match response.chars().next() {
            Some('y') | Some('Y') => return Ok(true),
            Some('n') | Some('N') => return Ok(false),
            _ => writeln!(output, "Please input Y for yes or N for no.")?,
        }
    }
}
