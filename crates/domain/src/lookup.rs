use std::fmt;

/// Kind of lookup a cache entry answers.
///
/// Every kind owns a one-character tag so entries of different kinds can share
/// a single store without key collisions (`hexample.com` vs `r192.0.2.1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// Forward lookup: host name to addresses.
    Host,
    /// Reverse lookup: address to host names.
    Addr,
}

impl LookupKind {
    pub const fn tag(&self) -> char {
        match self {
            LookupKind::Host => 'h',
            LookupKind::Addr => 'r',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'h' => Some(LookupKind::Host),
            'r' => Some(LookupKind::Addr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Host => "host",
            LookupKind::Addr => "addr",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form of a host name used as cache key.
///
/// A single trailing dot is stripped and ASCII letters are lowercased, so
/// `Example.COM.` and `example.com` share one entry. Surrounding whitespace is
/// ignored. Returns `None` for a name that is empty after normalization.
pub fn normalize_host(host: &str) -> Option<String> {
    let trimmed = host.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_ascii_lowercase())
}
