use super::replacer::{parse_value, Replacer};
use crate::registry::IcmpRecord;

/// Descriptions containing any of these mark placeholder entries.
const SKIPPED_MARKERS: &[&str] = &["Reserved", "Unassigned", "Deprecated", "Experiment", "experiment"];

static IDENTIFIER_RULES: Replacer = Replacer::new(&[
    ("Messages", ""),
    ("Message", ""),
    ("ICMP", ""),
    ("+", "P"),
    ("-", ""),
    ("/", ""),
    (".", ""),
    (" ", ""),
]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIcmpType {
    pub original_description: String,
    pub identifier: String,
    pub value: u32,
}

impl CanonicalIcmpType {
    /// Whether the value fits the 8-bit type field of the ICMP header.
    pub fn fits_u8(&self) -> bool {
        u8::try_from(self.value).is_ok()
    }

    /// Whether this record produces a constant and a lookup entry.
    pub fn is_emitted(&self) -> bool {
        !self.identifier.is_empty() && self.fits_u8()
    }
}

/// Canonicalizes one ICMP type record, or returns `None` for placeholders.
pub fn canonicalize_icmp_type(record: &IcmpRecord) -> Option<CanonicalIcmpType> {
    let description = &record.description;
    if description.is_empty() || SKIPPED_MARKERS.iter().any(|m| description.contains(m)) {
        return None;
    }

    let original_description = description.split('\n').collect::<Vec<_>>().join(" ");
    let original_description = original_description.trim().to_string();
    let identifier = IDENTIFIER_RULES.replace(&original_description);

    Some(CanonicalIcmpType {
        original_description,
        identifier,
        value: parse_value(&record.value),
    })
}

pub fn canonicalize_icmp_types(records: &[IcmpRecord]) -> Vec<CanonicalIcmpType> {
    records.iter().filter_map(canonicalize_icmp_type).collect()
}
