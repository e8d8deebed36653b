use crate::{Elapsed, Error, Field, Result, Stamp};

/// Parse `input` against the declared notation.
///
/// Only the shape is validated; field magnitudes are folded into the total,
/// so `"90:00"` under [Stamp::MMSS] is 90 minutes. A `-` on the leading field
/// negates the whole result.
pub fn parse(stamp: Stamp, input: &str) -> Result<Elapsed> {
	let layout = stamp.layout();

	let values = match layout.fields {
		// Bare notations take one plain integer of unbounded magnitude.
		// An empty input counts as zero.
		[_] if input.is_empty() => vec![0],
		[_] => vec![input.parse().map_err(|_| Error::Format {
			pattern: layout.scan,
			input: input.to_string(),
		})?],
		_ => scan(layout.scan, input)?,
	};

	Ok(compose(layout.fields, &values))
}

impl Stamp {
	/// Parse `input` against this notation. See [parse].
	pub fn parse(&self, input: &str) -> Result<Elapsed> {
		parse(*self, input)
	}
}

/// Scan `input` against a `%d`-verb pattern, returning the extracted fields.
///
/// Any pattern byte other than a verb must match the input exactly, and the
/// input must be fully consumed. Only the first field may carry a sign.
fn scan(pattern: &'static str, input: &str) -> Result<Vec<i64>> {
	let err = || Error::Format {
		pattern,
		input: input.to_string(),
	};

	let mut values = Vec::new();
	let mut pat = pattern;
	let mut rest = input;

	while !pat.is_empty() {
		if let Some(p) = pat.strip_prefix("%d") {
			pat = p;
			let (value, tail) = take_int(rest, values.is_empty()).ok_or_else(err)?;
			values.push(value);
			rest = tail;
		} else {
			let (delim, p) = pat.split_at(1);
			pat = p;
			rest = rest.strip_prefix(delim).ok_or_else(err)?;
		}
	}

	if !rest.is_empty() {
		return Err(err());
	}

	Ok(values)
}

/// Take one integer off the front of `s`, accepting a leading `-` only when
/// `signed`.
fn take_int(s: &str, signed: bool) -> Option<(i64, &str)> {
	let (negative, digits) = match s.strip_prefix('-') {
		Some(rest) if signed => (true, rest),
		_ => (false, s),
	};

	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	if end == 0 {
		return None;
	}

	let value: i64 = digits[..end].parse().ok()?;
	Some((if negative { -value } else { value }, &digits[end..]))
}

/// Fold extracted field values into a single elapsed time.
fn compose(fields: &[Field], values: &[i64]) -> Elapsed {
	let negative = values.first().is_some_and(|v| *v < 0);

	let mut nanos: i64 = 0;
	for (field, value) in fields.iter().zip(values) {
		nanos = nanos.saturating_add(value.saturating_abs().saturating_mul(field.nanos()));
	}

	if negative {
		nanos = -nanos;
	}

	Elapsed::from_nanos(nanos)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn full() {
		let elapsed = Stamp::HHMMSSsss.parse("01:02:03.250").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_millis(3_723_250));

		let elapsed = Stamp::Timestamp.parse("01:02:03").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_seconds(3_723));
	}

	#[test]
	fn bare() {
		// Bare notations fold any magnitude into the total.
		assert_eq!(Stamp::SS.parse("125").expect("failed to parse"), Elapsed::from_seconds(125));
		assert_eq!(Stamp::MM.parse("90").expect("failed to parse"), Elapsed::from_minutes(90));
		assert_eq!(Stamp::HH.parse("2").expect("failed to parse"), Elapsed::from_hours(2));

		// An empty bare input is zero.
		assert_eq!(Stamp::SS.parse("").expect("failed to parse"), Elapsed::ZERO);
	}

	#[test]
	fn folding() {
		// Subordinate fields are not range checked.
		let elapsed = Stamp::MMSS.parse("90:00").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_minutes(90));

		let elapsed = Stamp::Cuestamp.parse("2:75").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_seconds(195));
	}

	#[test]
	fn negative() {
		// A sign on the leading field negates the whole result.
		let elapsed = Stamp::MMSS.parse("-1:30").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_seconds(-90));

		let elapsed = Stamp::SS.parse("-5").expect("failed to parse");
		assert_eq!(elapsed, Elapsed::from_seconds(-5));

		// Any other field may not carry one.
		Stamp::MMSS.parse("1:-30").expect_err("sign after the leading field");
	}

	#[test]
	fn rejects() {
		Stamp::MMSS.parse("12:5a").expect_err("trailing letter");
		Stamp::HHMMSS.parse("12").expect_err("wrong field count");
		Stamp::HHMMSS.parse("12:05").expect_err("wrong field count");
		Stamp::MMSS.parse("12.05").expect_err("wrong delimiter");
		Stamp::HHMMSSsss.parse("01:02:03").expect_err("missing millis group");
		Stamp::SS.parse("5s").expect_err("not a plain integer");
		Stamp::MMSS.parse("").expect_err("empty multi-field input");

		let err = Stamp::MMSS.parse("12:5a").expect_err("trailing letter");
		assert_eq!(
			err,
			Error::Format {
				pattern: "%d:%d",
				input: "12:5a".to_string(),
			}
		);
	}
}
