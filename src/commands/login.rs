//! Login prompt.

use crate::error::AppError;
use std::io::{BufRead, Write};

/// Ask for username and password.
///
/// Returns `None` when the operator cancels: an empty username or end of input.
/// With `masked` the password is read from the terminal without echo.
pub fn prompt_credentials<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    masked: bool,
) -> Result<Option<(String, String)>, AppError> {
    writeln!(output, "Login")?;
    write!(output, "Username: ")?;
    output.flush()?;

    let username = match read_field(input)? {
        Some(u) if !u.is_empty() => u,
        _ => return Ok(None),
    };

    let password = if masked {
        rpassword::prompt_password("Password: ")?
    } else {
        write!(output, "Password: ")?;
        output.flush()?;
        match read_field(input)? {
            Some(p) => p,
            None => return Ok(None),
        }
    };

    Ok(Some((username, password)))
}

/// One line without its terminator; surrounding spaces are kept.
fn read_field<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
