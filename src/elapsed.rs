use std::{fmt, num::TryFromIntError, time};

use derive_more::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign, Sum};

/// A signed elapsed time with nanosecond resolution.
///
/// Unlike [std::time::Duration] this may be negative, so a parsed `"-01:30"`
/// stays a single value instead of a sign flag on the side.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Default,
	Hash,
	Add,
	AddAssign,
	Sub,
	SubAssign,
	Mul,
	MulAssign,
	Div,
	DivAssign,
	Rem,
	RemAssign,
	Neg,
	Sum,
)]
pub struct Elapsed {
	nanos: i64,
}

impl Elapsed {
	pub const ZERO: Self = Self { nanos: 0 };

	pub const fn from_nanos(nanos: i64) -> Self {
		Self { nanos }
	}

	pub const fn from_micros(micros: i64) -> Self {
		Self { nanos: micros * 1_000 }
	}

	pub const fn from_millis(millis: i64) -> Self {
		Self {
			nanos: millis * 1_000_000,
		}
	}

	pub const fn from_seconds(seconds: i64) -> Self {
		Self {
			nanos: seconds * 1_000_000_000,
		}
	}

	pub const fn from_minutes(minutes: i64) -> Self {
		Self {
			nanos: minutes * 60_000_000_000,
		}
	}

	pub const fn from_hours(hours: i64) -> Self {
		Self {
			nanos: hours * 3_600_000_000_000,
		}
	}

	pub const fn as_nanos(&self) -> i64 {
		self.nanos
	}

	pub const fn as_micros(&self) -> i64 {
		self.nanos / 1_000
	}

	pub const fn as_millis(&self) -> i64 {
		self.nanos / 1_000_000
	}

	pub const fn as_seconds(&self) -> i64 {
		self.nanos / 1_000_000_000
	}

	pub const fn as_minutes(&self) -> i64 {
		self.nanos / 60_000_000_000
	}

	pub const fn as_hours(&self) -> i64 {
		self.nanos / 3_600_000_000_000
	}

	pub const fn is_negative(&self) -> bool {
		self.nanos < 0
	}

	pub const fn abs(&self) -> Self {
		Self {
			nanos: self.nanos.saturating_abs(),
		}
	}
}

impl TryFrom<time::Duration> for Elapsed {
	type Error = TryFromIntError;

	fn try_from(d: time::Duration) -> Result<Self, Self::Error> {
		Ok(Self {
			nanos: i64::try_from(d.as_nanos())?,
		})
	}
}

impl TryFrom<Elapsed> for time::Duration {
	type Error = TryFromIntError;

	/// Succeeds iff the elapsed time is not negative.
	fn try_from(e: Elapsed) -> Result<Self, Self::Error> {
		Ok(time::Duration::from_nanos(u64::try_from(e.nanos)?))
	}
}

impl fmt::Debug for Elapsed {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.nanos == 0 {
			return write!(f, "0");
		}

		if self.nanos < 0 {
			write!(f, "-")?;
		}

		let nanos = self.nanos.unsigned_abs();
		let hours = nanos / 3_600_000_000_000;
		let minutes = (nanos % 3_600_000_000_000) / 60_000_000_000;
		let seconds = (nanos % 60_000_000_000) / 1_000_000_000;
		let millis = (nanos % 1_000_000_000) / 1_000_000;
		let micros = (nanos % 1_000_000) / 1_000;

		let mut parts = Vec::new();
		if hours > 0 {
			parts.push(format!("{}h", hours));
		}
		if minutes > 0 {
			parts.push(format!("{:02}m", minutes));
		}
		if seconds > 0 {
			parts.push(format!("{:02}s", seconds));
		}
		if millis > 0 {
			parts.push(format!("{:03}ms", millis));
		}
		if micros > 0 {
			parts.push(format!("{:03}us", micros));
		}

		write!(f, "{}", parts.join(" "))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn units() {
		assert_eq!(Elapsed::from_hours(2).as_minutes(), 120);
		assert_eq!(Elapsed::from_minutes(90).as_seconds(), 5400);
		assert_eq!(Elapsed::from_seconds(1).as_millis(), 1_000);
		assert_eq!(Elapsed::from_millis(250).as_micros(), 250_000);
		assert_eq!(Elapsed::from_micros(-5).as_nanos(), -5_000);
	}

	#[test]
	fn arithmetic() {
		let total = Elapsed::from_minutes(1) + Elapsed::from_seconds(30);
		assert_eq!(total.as_seconds(), 90);
		assert_eq!(-total, Elapsed::from_seconds(-90));
		assert_eq!(total.abs(), total);
		assert_eq!((-total).abs(), total);
	}

	#[test]
	fn std_duration() {
		let d = time::Duration::from_millis(1_500);
		let e = Elapsed::try_from(d).expect("fits in i64");
		assert_eq!(e, Elapsed::from_millis(1_500));
		assert_eq!(time::Duration::try_from(e).expect("not negative"), d);

		time::Duration::try_from(Elapsed::from_seconds(-1)).expect_err("negative");
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Elapsed::ZERO), "0");

		let e = Elapsed::from_seconds(3723) + Elapsed::from_millis(250);
		assert_eq!(format!("{:?}", e), "1h 02m 03s 250ms");

		let e = Elapsed::from_seconds(-5);
		assert_eq!(format!("{:?}", e), "-05s");
	}
}
