//! Alphabet extraction: distinct symbols of a sequence pair with dense indices.
//!
//! Indices are handed out in first-seen order, scanning the first sequence
//! before the second. Lookup goes through a direct table covering every byte
//! value, so `index_of` never searches.

use crate::error::{LcsError, Phase, Result};

const UNASSIGNED: u16 = u16::MAX;

#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: [u16; 256],
}

impl Alphabet {
    /// Collect the distinct symbols of `a` and `b`.
    ///
    /// Fails with [`LcsError::InvalidInput`] when both sequences are empty,
    /// since there is nothing to index.
    pub fn from_pair(a: &[u8], b: &[u8]) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("alphabet", len_a = a.len(), len_b = b.len()).entered();

        if a.is_empty() && b.is_empty() {
            return Err(LcsError::invalid(
                Phase::Alphabet,
                "both sequences are empty",
            ));
        }

        let mut alphabet = Alphabet {
            symbols: Vec::new(),
            index: [UNASSIGNED; 256],
        };
        for &symbol in a.iter().chain(b) {
            let slot = &mut alphabet.index[symbol as usize];
            if *slot == UNASSIGNED {
                *slot = alphabet.symbols.len() as u16;
                alphabet.symbols.push(symbol);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(size = alphabet.len(), "alphabet built");
        Ok(alphabet)
    }

    /// Number of distinct symbols, `|Σ|`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in index order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        match self.index[symbol as usize] {
            UNASSIGNED => None,
            idx => Some(idx as usize),
        }
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Index of a symbol that must be present.
    ///
    /// A miss means the alphabet was built from different sequences than the
    /// ones being scored; it is reported as [`LcsError::InvariantViolation`]
    /// rather than mapped to a default index.
    pub fn require(&self, symbol: u8) -> Result<usize> {
        self.index_of(symbol).ok_or_else(|| {
            LcsError::invariant(
                Phase::Scoring,
                format!(
                    "symbol {:?} (0x{symbol:02x}) has no alphabet index",
                    symbol as char
                ),
            )
        })
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}
