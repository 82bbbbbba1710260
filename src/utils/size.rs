//! Chunk size strings as understood by `split -b`.
//!
//! Accepted forms are a positive integer with an optional unit:
//! `b` (512-byte blocks), `K M G T P E Z Y R Q` (powers of 1024, also
//! written `KiB`, `MiB`, ...; `k` and `m` may be lower case) or `KB MB ...`
//! (powers of 1000). The original text is kept so it can be handed to the
//! splitter verbatim.

use crate::utils::config::DEFAULT_SPLIT_SIZE;
use crate::utils::error::SizeError;
use std::fmt;
use std::str::FromStr;

const UNITS: &[char] = &['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y', 'R', 'Q'];
const BLOCK_UNIT: char = 'b';
const BLOCK_SIZE: u64 = 512;

/// A validated chunk size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSize {
    text: String,
    bytes: u64,
}

impl ChunkSize {
    /// Size in bytes
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Argument passed to the splitter's `-b` flag
    pub fn as_arg(&self) -> &str {
        &self.text
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            text: DEFAULT_SPLIT_SIZE.to_string(),
            bytes: 25 * 1024 * 1024,
        }
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ChunkSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(SizeError::Empty);
        }

        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, suffix) = text.split_at(digits_end);

        if digits.is_empty() {
            return Err(SizeError::Invalid(text.to_string()));
        }

        let count: u64 = digits
            .parse()
            .map_err(|_| SizeError::Overflow(text.to_string()))?;
        let multiplier = unit_multiplier(suffix, text)?;

        let bytes = count
            .checked_mul(multiplier)
            .ok_or_else(|| SizeError::Overflow(text.to_string()))?;

        if bytes == 0 {
            return Err(SizeError::Zero);
        }

        Ok(Self {
            text: text.to_string(),
            bytes,
        })
    }
}

/// Multiplier for a unit suffix
///
/// Mirrors `split -b`: `b` is a 512-byte block, `k`/`m` may be lower case,
/// and units past `E` are accepted but overflow a `u64`.
fn unit_multiplier(suffix: &str, text: &str) -> Result<u64, SizeError> {
    let invalid = || SizeError::Invalid(text.to_string());

    let mut chars = suffix.chars();
    let Some(unit) = chars.next() else {
        return Ok(1);
    };
    let rest = chars.as_str();

    if unit == BLOCK_UNIT {
        return if rest.is_empty() { Ok(BLOCK_SIZE) } else { Err(invalid()) };
    }

    let unit = match unit {
        'k' => 'K',
        'm' => 'M',
        other => other,
    };
    let power = UNITS.iter().position(|&u| u == unit).ok_or_else(invalid)? as u32 + 1;

    let base: u64 = match rest {
        "" | "iB" => 1024,
        "B" => 1000,
        _ => return Err(invalid()),
    };

    base.checked_pow(power)
        .ok_or_else(|| SizeError::Overflow(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_bytes() {
        let size: ChunkSize = "4096".parse().unwrap();
        assert_eq!(size.bytes(), 4096);
        assert_eq!(size.as_arg(), "4096");
    }

    #[test]
    fn test_binary_units() {
        assert_eq!("25M".parse::<ChunkSize>().unwrap().bytes(), 25 * 1024 * 1024);
        assert_eq!("1K".parse::<ChunkSize>().unwrap().bytes(), 1024);
        assert_eq!("2GiB".parse::<ChunkSize>().unwrap().bytes(), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_lower_case_and_block_units() {
        assert_eq!("25m".parse::<ChunkSize>().unwrap().bytes(), 25 * 1024 * 1024);
        assert_eq!("500k".parse::<ChunkSize>().unwrap().bytes(), 500 * 1024);
        assert_eq!("2b".parse::<ChunkSize>().unwrap().bytes(), 1024);
        assert_eq!("1kB".parse::<ChunkSize>().unwrap().bytes(), 1000);
        // passed through to the splitter untouched
        assert_eq!("25m".parse::<ChunkSize>().unwrap().as_arg(), "25m");
    }

    #[test]
    fn test_decimal_units() {
        assert_eq!("25MB".parse::<ChunkSize>().unwrap().bytes(), 25_000_000);
        assert_eq!("3KB".parse::<ChunkSize>().unwrap().bytes(), 3_000);
    }

    #[test]
    fn test_default_matches_parsed() {
        assert_eq!(ChunkSize::default(), "25M".parse::<ChunkSize>().unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!("".parse::<ChunkSize>(), Err(SizeError::Empty));
        assert_eq!("0M".parse::<ChunkSize>(), Err(SizeError::Zero));
        assert!(matches!("M".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
        assert!(matches!("25X".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
        assert!(matches!("25Mb".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
        assert!(matches!("-5".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
        assert!(matches!("5g".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
        assert!(matches!("5bB".parse::<ChunkSize>(), Err(SizeError::Invalid(_))));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!("99999E".parse::<ChunkSize>(), Err(SizeError::Overflow(_))));
        assert!(matches!("1Z".parse::<ChunkSize>(), Err(SizeError::Overflow(_))));
        assert!(matches!("1QB".parse::<ChunkSize>(), Err(SizeError::Overflow(_))));
    }
}
