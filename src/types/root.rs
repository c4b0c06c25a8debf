//! Sequence root: a digest of a list's ordered values.
//!
//! ## Purpose
//!
//! Persistence is left to the host application. The contract a host must
//! keep is that a rebuilt list holds the same ordered sequence of values.
//! The sequence root lets the host check that contract without comparing
//! element by element: equal sequences produce equal roots.
//!
//! ## Encoding
//!
//! ```text
//! SHA-256( len as u64 LE || for each value: (ssz_len as u64 LE || ssz_bytes) )
//! ```
//!
//! Node keys and change counters are never hashed, so a list rebuilt from
//! an exported sequence has the same root as the list it came from.

use std::fmt;

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::{ListError, ListResult};

/// 32-byte SHA-256 digest of an ordered value sequence.
///
/// ## Example
///
/// ```
/// use sorted_list::OrderedList;
///
/// let a: OrderedList<u64> = [3u64, 1, 2].into_iter().collect();
/// let b: OrderedList<u64> = [1u64, 2, 3].into_iter().collect();
///
/// assert_eq!(a.state_root().unwrap(), b.state_root().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequenceRoot(pub [u8; 32]);

impl SequenceRoot {
    /// Compute the root of `values`, which must yield exactly `len` items
    /// in list order.
    ///
    /// # Errors
    ///
    /// [`ListError::Encoding`] if any value fails to SSZ-encode.
    pub fn compute<'a, T, I>(len: usize, values: I) -> ListResult<Self>
    where
        T: SimpleSerialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut hasher = Sha256::new();
        hasher.update((len as u64).to_le_bytes());

        for value in values {
            let bytes = ssz_rs::serialize(value)
                .map_err(|err| ListError::Encoding(format!("{err:?}")))?;
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }

        let result = hasher.finalize();
        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        Ok(Self(root))
    }

    /// Raw digest bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Digest as a lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SequenceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
