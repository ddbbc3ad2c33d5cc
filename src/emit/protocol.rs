use std::fmt::Write;

use tracing::warn;

use super::doc_text;
use crate::canonical::CanonicalProtocol;
use crate::common::constants::{PROTOCOL_MODULE, PROTOCOL_PREFIX};
use crate::common::error::Result;

/// Writes one constant per named protocol. No lookup table is produced for
/// protocol numbers.
pub fn emit_protocols(
    out: &mut String,
    title: &str,
    updated: &str,
    protocols: &[CanonicalProtocol],
) -> Result<usize> {
    writeln!(out, "pub mod {PROTOCOL_MODULE} {{")?;
    writeln!(out, "//! {}, Updated: {}", doc_text(title), doc_text(updated))?;

    for p in protocols.iter().filter(|p| !p.name.is_empty() && !p.fits_u8()) {
        warn!("Skipping protocol {}: value {} does not fit in u8", p.name, p.value);
    }

    let mut count = 0;
    for p in protocols.iter().filter(|p| p.is_emitted()) {
        writeln!(out, "/// {}", doc_text(p.comment()))?;
        writeln!(out, "pub const {PROTOCOL_PREFIX}{}: u8 = {};", p.name, p.value)?;
        count += 1;
    }
    writeln!(out, "}}")?;

    Ok(count)
}
