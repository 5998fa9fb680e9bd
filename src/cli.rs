//! Line-oriented driver behind the `text-value` binary

use std::io::{self, BufRead, Write};

use crate::value::ImmutableValue;

/// Read `input` line by line and write `B{text=..} <hash code>` for each
/// line to `out`. Returns the number of values written.
///
/// Lines that are not valid UTF-8 are logged and skipped. A line equal to the
/// previous one reuses the previous instance.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<usize> {
    let mut previous: Option<ImmutableValue> = None;
    let mut count = 0usize;

    for (index, raw) in input.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let text = match std::str::from_utf8(&raw) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Skipping line {}: {}", index + 1, err);
                continue;
            }
        };

        let value = match previous.as_ref() {
            Some(prev) => prev.with_text(text),
            None => ImmutableValue::copy_of(text),
        };

        if previous
            .as_ref()
            .is_some_and(|prev| ImmutableValue::ptr_eq(prev, &value))
        {
            tracing::debug!("Reused instance for repeated line {}", index + 1);
        }

        writeln!(out, "{} {}", value, value.hash_code())?;
        previous = Some(value);
        count += 1;
    }

    out.flush()?;
    Ok(count)
}
