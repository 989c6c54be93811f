use anyhow::Result;
use intcalc::evaluate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Plain prompt loop: one expression per line until `exit` or end of input.
/// Results go to `out`; a failed line prints an empty line to `out` and the
/// message to `err`, then the loop carries on.
pub fn run_plain<R, W, E>(input: R, out: &mut W, err: &mut E) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let text = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break;
            }
        };

        if text.is_empty() {
            continue;
        }

        if text.eq_ignore_ascii_case("exit") {
            break;
        }

        match evaluate(&text) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(e) => {
                debug!(input = %text, error = %e, "rejected line");
                writeln!(out)?;
                writeln!(err, "{}", e)?;
            }
        }
    }

    info!("plain session finished");
    Ok(())
}
