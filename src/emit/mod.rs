//! Emission of generated Rust source.
//!
//! Every comment in the generated text is a doc comment. The formatting pass
//! re-prints the source from its syntax tree, and plain `//` comments do not
//! survive that.

use std::fmt::Write;

use crate::common::constants::GENERATED_HEADER;
use crate::common::error::Result;

pub mod icmp;
pub mod protocol;

pub use icmp::emit_icmp_types;
pub use protocol::emit_protocols;

/// Flattens text onto one line so it can sit in a line doc comment.
pub(crate) fn doc_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Writes the generated-file header and opens the target module.
pub fn begin_document(out: &mut String, module: &str) -> Result<()> {
    for line in GENERATED_HEADER {
        writeln!(out, "//! {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "#[allow(non_upper_case_globals)]")?;
    writeln!(out, "pub mod {module} {{")?;
    Ok(())
}

/// Closes the target module opened by [`begin_document`].
pub fn end_document(out: &mut String) -> Result<()> {
    writeln!(out, "}}")?;
    Ok(())
}

/// Parses the assembled source and pretty-prints it.
///
/// Fails with a format error when the buffer is not valid Rust, for example
/// when a registry label canonicalizes to something that is not an
/// identifier.
pub fn format_source(source: &str) -> Result<String> {
    let file = syn::parse_file(source)?;
    Ok(prettyplease::unparse(&file))
}
