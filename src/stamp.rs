use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The unit carried by one position of a stamp notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Hours,
	Minutes,
	Seconds,
	Millis,
}

impl Field {
	/// The span of one unit of this field, in nanoseconds.
	pub const fn nanos(self) -> i64 {
		match self {
			Self::Hours => 3_600_000_000_000,
			Self::Minutes => 60_000_000_000,
			Self::Seconds => 1_000_000_000,
			Self::Millis => 1_000_000,
		}
	}
}

/// How one notation is scanned and printed.
///
/// Every [Stamp] maps to exactly one layout; the aliases share the layout of
/// the notation they name, so the tables cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	/// The ordered field subset this notation carries.
	pub fields: &'static [Field],

	/// Scan pattern: `%d` verbs separated by literal delimiters.
	pub scan: &'static str,

	/// Duration expression pattern: unpadded `%v` verbs with unit suffixes.
	pub dur: &'static str,

	/// Display pattern: zero-padded `%02v`/`%03v` verbs.
	pub display: &'static str,
}

const HH: Layout = Layout {
	fields: &[Field::Hours],
	scan: "%d",
	dur: "%vh",
	display: "%02v",
};

const MM: Layout = Layout {
	fields: &[Field::Minutes],
	scan: "%d",
	dur: "%vm",
	display: "%02v",
};

const SS: Layout = Layout {
	fields: &[Field::Seconds],
	scan: "%d",
	dur: "%vs",
	display: "%02v",
};

const MMSS: Layout = Layout {
	fields: &[Field::Minutes, Field::Seconds],
	scan: "%d:%d",
	dur: "%vm%vs",
	display: "%02v:%02v",
};

const HHMMSS: Layout = Layout {
	fields: &[Field::Hours, Field::Minutes, Field::Seconds],
	scan: "%d:%d:%d",
	dur: "%vh%vm%vs",
	display: "%02v:%02v:%02v",
};

const HHMMSS_MS: Layout = Layout {
	fields: &[Field::Hours, Field::Minutes, Field::Seconds, Field::Millis],
	scan: "%d:%d:%d.%d",
	dur: "%vh%vm%v.%03vs",
	display: "%02v:%02v:%02v.%03v",
};

/// A fixed notation for writing an elapsed time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stamp {
	/// Bare hours: `"02"`.
	#[serde(rename = "hh")]
	HH,

	/// Bare minutes: `"90"`.
	#[serde(rename = "mm")]
	MM,

	/// Bare seconds: `"125"`.
	#[serde(rename = "ss")]
	SS,

	/// `"62:03"`
	#[serde(rename = "mmss")]
	MMSS,

	/// `"01:02:03"`
	#[serde(rename = "hhmmss")]
	HHMMSS,

	/// `"01:02:03.250"`
	#[serde(rename = "hhmmsssss")]
	HHMMSSsss,

	/// Alias of [Stamp::HHMMSS].
	#[serde(rename = "timestamp")]
	Timestamp,

	/// Alias of [Stamp::MMSS], as written in cue sheets.
	#[serde(rename = "cuestamp")]
	Cuestamp,

	/// Alias of [Stamp::HHMMSSsss].
	#[serde(rename = "fullstamp")]
	FullStamp,
}

impl Stamp {
	/// The layout backing this notation. Total over the enumeration.
	pub const fn layout(self) -> &'static Layout {
		match self {
			Self::HH => &HH,
			Self::MM => &MM,
			Self::SS => &SS,
			Self::MMSS | Self::Cuestamp => &MMSS,
			Self::HHMMSS | Self::Timestamp => &HHMMSS,
			Self::HHMMSSsss | Self::FullStamp => &HHMMSS_MS,
		}
	}

	pub const fn scan_pattern(self) -> &'static str {
		self.layout().scan
	}

	pub const fn dur_pattern(self) -> &'static str {
		self.layout().dur
	}

	pub const fn display_pattern(self) -> &'static str {
		self.layout().display
	}

	pub const fn field_count(self) -> usize {
		self.layout().fields.len()
	}

	/// Whether this notation carries a milliseconds field.
	pub const fn has_millis(self) -> bool {
		matches!(self, Self::HHMMSSsss | Self::FullStamp)
	}

	const fn name(self) -> &'static str {
		match self {
			Self::HH => "hh",
			Self::MM => "mm",
			Self::SS => "ss",
			Self::MMSS => "mmss",
			Self::HHMMSS => "hhmmss",
			Self::HHMMSSsss => "hhmmsssss",
			Self::Timestamp => "timestamp",
			Self::Cuestamp => "cuestamp",
			Self::FullStamp => "fullstamp",
		}
	}
}

impl TryFrom<u64> for Stamp {
	type Error = Error;

	fn try_from(v: u64) -> Result<Self, Self::Error> {
		Ok(match v {
			0 => Self::HH,
			1 => Self::MM,
			2 => Self::SS,
			3 => Self::MMSS,
			4 => Self::HHMMSS,
			5 => Self::HHMMSSsss,
			6 => Self::Timestamp,
			7 => Self::Cuestamp,
			8 => Self::FullStamp,
			_ => return Err(Error::UnsupportedFormat(v.to_string())),
		})
	}
}

impl From<Stamp> for u64 {
	fn from(s: Stamp) -> Self {
		match s {
			Stamp::HH => 0,
			Stamp::MM => 1,
			Stamp::SS => 2,
			Stamp::MMSS => 3,
			Stamp::HHMMSS => 4,
			Stamp::HHMMSSsss => 5,
			Stamp::Timestamp => 6,
			Stamp::Cuestamp => 7,
			Stamp::FullStamp => 8,
		}
	}
}

impl fmt::Display for Stamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

impl FromStr for Stamp {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"hh" => Self::HH,
			"mm" => Self::MM,
			"ss" => Self::SS,
			"mmss" => Self::MMSS,
			"hhmmss" => Self::HHMMSS,
			"hhmmsssss" => Self::HHMMSSsss,
			"timestamp" => Self::Timestamp,
			"cuestamp" => Self::Cuestamp,
			"fullstamp" => Self::FullStamp,
			_ => return Err(Error::UnsupportedFormat(s.to_string())),
		})
	}
}
