use crate::wktify::error::Error;
use crate::wktify::transform;
use std::io::{self, BufRead, Write};

/// Rewrites each non-blank line of `input` onto `output`, one record per
/// line, input order preserved. Blank lines are dropped. The first bad
/// record aborts the loop; lines already written stay written.
pub fn pipe(input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), Error> {
    for l in input.lines() {
        let line = l?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", transform::transform_line(&line)?)?;
    }
    Ok(())
}

pub fn pipe_stdio() -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    pipe(&mut input, &mut output)
}
