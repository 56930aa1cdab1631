use compact_str::CompactString;
use dnscache_domain::LookupKind;
use std::fmt;

/// Store key: lookup kind plus the normalized name.
///
/// Displays as the flat tagged form, e.g. `hexample.com`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: LookupKind,
    pub name: CompactString,
}

impl CacheKey {
    #[inline]
    pub fn new(kind: LookupKind, name: &str) -> Self {
        Self {
            kind,
            name: CompactString::from(name),
        }
    }

    #[inline]
    pub fn host(name: &str) -> Self {
        Self::new(LookupKind::Host, name)
    }

    #[inline]
    pub fn addr(name: &str) -> Self {
        Self::new(LookupKind::Addr, name)
    }

    /// Parses the flat tagged form produced by `Display`.
    pub fn parse_flat(flat: &str) -> Option<Self> {
        let mut chars = flat.chars();
        let kind = LookupKind::from_tag(chars.next()?)?;
        let name = chars.as_str();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(kind, name))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.name)
    }
}
