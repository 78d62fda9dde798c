//! Reading the inference input and rendering the program's output lines.

use crate::error::{Error, Result};
use crate::scalar::ScalarOps;
use crate::trainer::TrainingReport;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Parses one floating-point value, ignoring surrounding whitespace.
pub fn parse_input<T>(line: &str) -> Result<T>
where
    T: ScalarOps + FromStr,
{
    let trimmed = line.trim();
    trimmed
        .parse::<T>()
        .map_err(|_| Error::ParseInput(trimmed.to_string()))
}

/// Reads the first non-blank line from `reader` and parses it.
///
/// Blank lines before the value are skipped. End of input counts as an empty,
/// unparsable line.
pub fn read_value<T, R>(reader: &mut R) -> Result<T>
where
    T: ScalarOps + FromStr,
    R: BufRead,
{
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || !line.trim().is_empty() {
            break;
        }
    }
    parse_input(&line)
}

/// Writes the post-training summary: loss, weight and bias with six decimals.
pub fn write_report<T: ScalarOps, W: Write>(
    out: &mut W,
    report: &TrainingReport<T>,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Loss: {:.6} ", report.last_loss.to_f64())?;
    writeln!(out, "Weight: {:.6} ", report.params.weight.to_f64())?;
    writeln!(out, "Bias: {:.6} ", report.params.bias.to_f64())?;
    Ok(())
}

/// Writes the input prompt without a trailing newline and flushes it.
pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    write!(out, "Insert X: ")?;
    out.flush()?;
    Ok(())
}

pub fn write_prediction<T: ScalarOps, W: Write>(
    out: &mut W,
    input: T,
    predicted: T,
) -> Result<()> {
    writeln!(
        out,
        "Input(X) = {:.2}: Predicted (Y) = {:.2}",
        input.to_f64(),
        predicted.to_f64()
    )?;
    Ok(())
}
