//! Serde shapes for the IANA registry XML documents.
//!
//! Only the elements the generator reads are modelled. Everything else in
//! the documents (`xref`, `note`, `people`, attributes, namespaces) is
//! skipped by the deserializer.

use serde::{Deserialize, Deserializer};

/// Root of `icmp-parameters.xml`: a registry of sub-registries.
#[derive(Debug, Deserialize, Default)]
pub struct IcmpParameters {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub updated: String,
    #[serde(rename = "registry", default)]
    pub registries: Vec<IcmpSubRegistry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct IcmpSubRegistry {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "record", default)]
    pub records: Vec<IcmpRecord>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct IcmpRecord {
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "direct_text")]
    pub description: String,
}

/// Root of `protocol-numbers.xml`: one inner registry holding a flat list.
#[derive(Debug, Deserialize, Default)]
pub struct ProtocolNumbers {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub registry: ProtocolRegistry,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProtocolRegistry {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "record", default)]
    pub records: Vec<ProtocolRecord>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ProtocolRecord {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "direct_text")]
    pub description: String,
}

/// One piece of mixed element content: a text run or a nested element.
#[derive(Debug, Deserialize)]
enum ContentPart {
    #[serde(rename = "$text")]
    Text(String),
    #[serde(other)]
    Element,
}

#[derive(Debug, Deserialize, Default)]
struct MixedContent {
    #[serde(rename = "$value", default)]
    parts: Vec<ContentPart>,
}

/// Reads only the direct text of an element, skipping nested elements such
/// as an inline `<xref/>`. Text runs separated by an element are joined
/// with a single space.
fn direct_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let content = MixedContent::deserialize(deserializer)?;
    let text = content
        .parts
        .into_iter()
        .filter_map(|part| match part {
            ContentPart::Text(text) => Some(text.trim().to_string()),
            ContentPart::Element => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(text)
}
