use serde::{Deserialize, Serialize};

/// Version fingerprint of a law set.
///
/// blake3 over the canonical serialization of the law declarations in
/// declared order, under a domain-separation tag. Any change to ids, order,
/// parameters, or descriptions yields a different version. Verdicts and
/// certificates are bound to the version they were formed under, which is
/// how stale certifications are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LawSetVersion([u8; 32]);

impl LawSetVersion {
    /// Hash canonical declaration material into a version.
    pub fn compute(material: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        // Domain separation tag
        hasher.update(b"lml-lawset-v1:");
        hasher.update(material);
        Self(*hasher.finalize().as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short display form (first 8 bytes hex).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl std::fmt::Display for LawSetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lsv:{}", self.short_hex())
    }
}

/// Hex encoding helpers (no external dep needed for this small utility).
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: &[u8]) -> String {
        let mut s = String::with_capacity(bytes.len() * 2);
        for &b in bytes {
            s.push(HEX_CHARS[(b >> 4) as usize] as char);
            s.push(HEX_CHARS[(b & 0xf) as usize] as char);
        }
        s
    }
}
