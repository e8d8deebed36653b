use crate::{Elapsed, Error, Field, Result, Stamp};

/// Render `elapsed` in the declared notation.
///
/// Only the declared fields are printed: the leading field absorbs everything
/// above it, so 90 minutes is `"90"` under [Stamp::MM] but `"01:30:00"` under
/// [Stamp::HHMMSS]. Notations without a milliseconds field round to the
/// nearest whole second, carrying upward; notations with one truncate below
/// the millisecond.
pub fn render(stamp: Stamp, elapsed: Elapsed) -> Result<String> {
	let layout = stamp.layout();
	let values = decompose(layout.fields, elapsed);

	let mut out = expand(layout.display, &values)?;
	if elapsed.is_negative() && values.iter().any(|v| *v != 0) {
		out.insert(0, '-');
	}

	Ok(out)
}

impl Stamp {
	/// Render `elapsed` in this notation. See [render].
	pub fn render(&self, elapsed: Elapsed) -> Result<String> {
		render(*self, elapsed)
	}
}

/// Format explicit field values as the zero-padded stamp, ex. `"01:02:03"`.
pub fn format_stamp(stamp: Stamp, values: &[i64]) -> Result<String> {
	expand(stamp.display_pattern(), values)
}

/// Format explicit field values as a duration expression, ex. `"1h2m3.250s"`.
pub fn format_dur(stamp: Stamp, values: &[i64]) -> Result<String> {
	expand(stamp.dur_pattern(), values)
}

/// Split the magnitude of `elapsed` across the notation's ordered fields.
fn decompose(fields: &[Field], elapsed: Elapsed) -> Vec<i64> {
	let nanos = elapsed.as_nanos().saturating_abs();

	let mut remaining = if matches!(fields.last(), Some(Field::Millis)) {
		// Truncate below the millisecond.
		nanos / 1_000_000 * 1_000_000
	} else {
		// Round the sub-second remainder to the nearest whole second; the
		// carry propagates through the division chain below.
		(nanos.saturating_add(500_000_000)) / 1_000_000_000 * 1_000_000_000
	};

	fields
		.iter()
		.map(|field| {
			let value = remaining / field.nanos();
			remaining %= field.nanos();
			value
		})
		.collect()
}

/// Expand a `%v`-verb pattern with the given values, zero-padding each to the
/// verb's width.
fn expand(pattern: &'static str, values: &[i64]) -> Result<String> {
	let mut out = String::new();
	let mut remaining = values;
	let mut pat = pattern;

	while !pat.is_empty() {
		let verb = ["%v", "%02v", "%03v"]
			.iter()
			.find_map(|verb| pat.strip_prefix(verb).map(|p| (*verb, p)));

		if let Some((verb, p)) = verb {
			pat = p;
			let (value, rest) = remaining.split_first().ok_or(Error::FieldCount {
				expected: count_verbs(pattern),
				actual: values.len(),
			})?;
			remaining = rest;

			match verb {
				"%02v" => out.push_str(&format!("{:02}", value)),
				"%03v" => out.push_str(&format!("{:03}", value)),
				_ => out.push_str(&format!("{}", value)),
			}
		} else {
			let (literal, p) = pat.split_at(1);
			pat = p;
			out.push_str(literal);
		}
	}

	if !remaining.is_empty() {
		return Err(Error::FieldCount {
			expected: count_verbs(pattern),
			actual: values.len(),
		});
	}

	Ok(out)
}

fn count_verbs(pattern: &str) -> usize {
	pattern.matches('%').count()
}
