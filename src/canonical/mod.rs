// Canonicalization of registry labels into identifier-safe names

pub mod icmp;
pub mod protocol;
pub mod replacer;

pub use icmp::{canonicalize_icmp_types, CanonicalIcmpType};
pub use protocol::{canonicalize_protocols, CanonicalProtocol};
