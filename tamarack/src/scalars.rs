//! The `ID` scalar.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};

/// An ID as defined by the GraphQL specification.
///
/// In-memory an `ID` is an opaque byte sequence; on the wire it travels
/// as a base64-encoded JSON string. Equality and ordering are over the
/// raw bytes.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ID(Vec<u8>);

impl ID {
    /// Decodes an `ID` from its base64 wire representation.
    pub fn from_base64(encoded: &str) -> Result<Self, DecodeError> {
        STANDARD.decode(encoded).map(ID)
    }

    /// Encodes this `ID` into its base64 wire representation.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// The raw bytes of this `ID`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl From<&str> for ID {
    fn from(s: &str) -> Self {
        ID(s.as_bytes().to_vec())
    }
}
