/// Registry locations and fixed text used across the codebase

// IANA registry documents
pub const ICMP_PARAMETERS_URL: &str =
    "https://www.iana.org/assignments/icmp-parameters/icmp-parameters.xml";
pub const PROTOCOL_NUMBERS_URL: &str =
    "https://www.iana.org/assignments/protocol-numbers/protocol-numbers.xml";

// Generated file layout
pub const GENERATED_HEADER: [&str; 2] = [
    "cargo run --bin iana_codegen > iana.rs",
    "GENERATED BY THE COMMAND ABOVE; DO NOT EDIT",
];
pub const DEFAULT_MODULE: &str = "ipv4";

// HTTP defaults
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("iana_codegen/", env!("CARGO_PKG_VERSION"));

// Identifier prefixes and per-registry module names in the generated source
pub const ICMP_TYPE_PREFIX: &str = "IcmpType";
pub const ICMP_TYPE_MODULE: &str = "icmp_type";
pub const ICMP_TYPE_TABLE: &str = "ICMP_TYPES";
pub const PROTOCOL_PREFIX: &str = "IanaProtocol";
pub const PROTOCOL_MODULE: &str = "protocol_number";
