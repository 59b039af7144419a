use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that determines generated boards.
///
/// Seeds are shown and parsed as 64 hexadecimal characters.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use tileslide_generator::PuzzleSeed;
///
/// let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed = PuzzleSeed::from_str(text)?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), tileslide_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the RNG used to shuffle a board of the given side.
    ///
    /// Boards of different sides draw from independent streams, so one seed
    /// can be shared across all difficulties.
    pub(crate) fn board_rng(&self, side: usize) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(b"tileslide-board");
        hasher.update((side as u64).to_le_bytes());
        Pcg64::from_seed(hasher.finalize().into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit at position {position}")]
    InvalidDigit {
        /// Character offset of the first invalid digit.
        position: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().as_bytes();
        if text.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: text.len() });
        }
        let digit = |position: usize| {
            char::from(text[position])
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(SeedParseError::InvalidDigit { position })
        };
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (digit(2 * i)? << 4) | digit(2 * i + 1)?;
        }
        Ok(Self(bytes))
    }
}
