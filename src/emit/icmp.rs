use std::fmt::Write;

use tracing::warn;

use super::doc_text;
use crate::canonical::CanonicalIcmpType;
use crate::common::constants::{ICMP_TYPE_MODULE, ICMP_TYPE_PREFIX, ICMP_TYPE_TABLE};
use crate::common::error::Result;

/// Writes the ICMP type constants followed by the value-to-name table.
///
/// Returns the number of constants written.
pub fn emit_icmp_types(
    out: &mut String,
    title: &str,
    updated: &str,
    types: &[CanonicalIcmpType],
) -> Result<usize> {
    let header = format!("{}, Updated: {}", doc_text(title), doc_text(updated));
    for t in types.iter().filter(|t| !t.identifier.is_empty() && !t.fits_u8()) {
        warn!("Skipping ICMP type {}: value {} does not fit in u8", t.identifier, t.value);
    }
    let emitted: Vec<&CanonicalIcmpType> = types.iter().filter(|t| t.is_emitted()).collect();

    writeln!(out, "pub mod {ICMP_TYPE_MODULE} {{")?;
    writeln!(out, "//! {header}")?;
    for t in &emitted {
        writeln!(out, "/// {}", doc_text(&t.original_description))?;
        writeln!(out, "pub const {ICMP_TYPE_PREFIX}{}: u8 = {};", t.identifier, t.value)?;
    }
    writeln!(out)?;
    writeln!(out, "/// {header}")?;
    writeln!(out, "pub static {ICMP_TYPE_TABLE}: &[(u8, &str)] = &[")?;
    for t in &emitted {
        writeln!(out, "({}, {:?}),", t.value, t.original_description.to_lowercase())?;
    }
    writeln!(out, "];")?;
    writeln!(out, "}}")?;

    Ok(emitted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(identifier: &str, description: &str, value: u32) -> CanonicalIcmpType {
        CanonicalIcmpType {
            original_description: description.into(),
            identifier: identifier.into(),
            value,
        }
    }

    #[test]
    fn constants_and_table_are_written() {
        let mut out = String::new();
        let count = emit_icmp_types(
            &mut out,
            "ICMP Parameters",
            "2024-01-12",
            &[canon("DestinationUnreachable", "Destination Unreachable", 3)],
        )
        .unwrap();

        assert_eq!(count, 1);
        assert!(out.contains("//! ICMP Parameters, Updated: 2024-01-12\n"));
        assert!(out.contains("/// Destination Unreachable\n"));
        assert!(out.contains("pub const IcmpTypeDestinationUnreachable: u8 = 3;"));
        assert!(out.contains("(3, \"destination unreachable\"),"));
    }

    #[test]
    fn empty_identifiers_are_skipped_everywhere() {
        let mut out = String::new();
        let count = emit_icmp_types(
            &mut out,
            "T",
            "U",
            &[canon("", "ICMP Messages", 7), canon("Echo", "Echo", 8)],
        )
        .unwrap();

        assert_eq!(count, 1);
        assert!(!out.contains("icmp messages"));
        assert!(!out.contains("(7,"));
        assert!(out.contains("(8, \"echo\"),"));
    }

    #[test]
    fn values_above_u8_range_are_skipped_everywhere() {
        let mut out = String::new();
        let count = emit_icmp_types(
            &mut out,
            "T",
            "U",
            &[canon("Future", "Future", 300), canon("Echo", "Echo", 8)],
        )
        .unwrap();

        assert_eq!(count, 1);
        assert!(!out.contains("IcmpTypeFuture"));
        assert!(!out.contains("(300,"));
        assert!(out.contains("pub const IcmpTypeEcho: u8 = 8;"));
    }

    #[test]
    fn descriptions_are_escaped_in_the_table() {
        let mut out = String::new();
        emit_icmp_types(&mut out, "T", "U", &[canon("Quote", "Say \"Hi\"", 1)]).unwrap();
        assert!(out.contains(r#"(1, "say \"hi\""),"#));
    }
}
