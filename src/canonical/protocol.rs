use super::replacer::{parse_value, Replacer};
use crate::registry::ProtocolRecord;

static NAME_RULES: Replacer = Replacer::new(&[
    ("-in-", "in"),
    ("-within-", "within"),
    ("-over-", "over"),
    ("+", "P"),
    ("-", ""),
    ("/", ""),
    (".", ""),
    (" ", ""),
]);

/// Names the rewrite rules would mangle, matched against the raw name.
const NAME_EXCEPTIONS: &[(&str, &str)] = &[("ISIS over IPv4", "ISIS"), ("manet", "MANET")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalProtocol {
    pub original_name: String,
    pub name: String,
    pub description: String,
    pub value: u32,
}

impl CanonicalProtocol {
    /// IP-in-IP encapsulation. The registry does not list anything at 0,
    /// but callers still want a constant for it.
    pub fn ip_pseudo_protocol() -> Self {
        Self {
            original_name: String::new(),
            name: "IP".to_string(),
            description: "IPv4 encapsulation, pseudo protocol number".to_string(),
            value: 0,
        }
    }

    /// Whether the value fits the 8-bit protocol field of the IPv4 header.
    pub fn fits_u8(&self) -> bool {
        u8::try_from(self.value).is_ok()
    }

    pub fn is_emitted(&self) -> bool {
        !self.name.is_empty() && self.fits_u8()
    }

    /// Text for the doc comment on the generated constant.
    pub fn comment(&self) -> &str {
        if self.description.is_empty() {
            &self.original_name
        } else {
            &self.description
        }
    }
}

pub fn canonical_protocol_name(name: &str) -> String {
    NAME_EXCEPTIONS
        .iter()
        .find(|(raw, _)| *raw == name)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| NAME_RULES.replace(name.trim()))
}

pub fn canonicalize_protocol(record: &ProtocolRecord) -> CanonicalProtocol {
    let description = record
        .description
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");

    CanonicalProtocol {
        original_name: record.name.clone(),
        name: canonical_protocol_name(&record.name),
        description,
        value: parse_value(&record.value),
    }
}

/// Canonicalizes every record, with the IP pseudo protocol always first.
pub fn canonicalize_protocols(records: &[ProtocolRecord]) -> Vec<CanonicalProtocol> {
    std::iter::once(CanonicalProtocol::ip_pseudo_protocol())
        .chain(records.iter().map(canonicalize_protocol))
        .collect()
}
