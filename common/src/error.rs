use thiserror::Error;

/// Raised when text or bytes cannot be turned into an address or frame.
///
/// Always recoverable: the value is simply not constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid MAC address '{input}': {reason}")]
    Mac { input: String, reason: &'static str },

    #[error("invalid IPv4 address '{input}': {reason}")]
    Ipv4 { input: String, reason: &'static str },

    #[error("invalid IPv6 address '{input}': {reason}")]
    Ipv6 { input: String, reason: &'static str },

    #[error("invalid EtherType '{input}': {reason}")]
    EtherType { input: String, reason: &'static str },

    #[error("buffer truncated: need at least {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
}

impl FormatError {
    pub(crate) fn mac(input: &str, reason: &'static str) -> Self {
        Self::Mac { input: input.to_string(), reason }
    }

    pub(crate) fn ipv4(input: &str, reason: &'static str) -> Self {
        Self::Ipv4 { input: input.to_string(), reason }
    }

    pub(crate) fn ipv6(input: &str, reason: &'static str) -> Self {
        Self::Ipv6 { input: input.to_string(), reason }
    }

    pub fn ethertype(input: &str, reason: &'static str) -> Self {
        Self::EtherType { input: input.to_string(), reason }
    }
}
