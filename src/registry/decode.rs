use tracing::{debug, warn};

use super::model::{IcmpParameters, IcmpRecord, IcmpSubRegistry, ProtocolNumbers, ProtocolRecord};
use crate::common::error::Result;

/// A decoded registry reduced to what the emitter needs: the header fields
/// and the records of interest, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDocument<R> {
    pub title: String,
    pub updated: String,
    pub records: Vec<R>,
}

impl IcmpParameters {
    /// The first sub-registry whose title mentions "type" or "Type".
    ///
    /// Later sub-registries (the per-type code tables) often mention a type
    /// too, so the scan stops at the first hit.
    pub fn type_registry(&self) -> Option<&IcmpSubRegistry> {
        self.registries
            .iter()
            .find(|r| r.title.contains("Type") || r.title.contains("type"))
    }
}

/// Decodes `icmp-parameters.xml` and keeps only the type-number records.
///
/// A document without a matching sub-registry decodes to an empty record
/// list rather than an error.
pub fn decode_icmp_parameters(body: &[u8]) -> Result<RegistryDocument<IcmpRecord>> {
    let params: IcmpParameters = quick_xml::de::from_reader(body)?;

    let records = match params.type_registry() {
        Some(registry) => {
            debug!(
                "Using sub-registry '{}' with {} records",
                registry.title,
                registry.records.len()
            );
            registry.records.clone()
        }
        None => {
            warn!(
                "No type sub-registry found among {} sub-registries",
                params.registries.len()
            );
            Vec::new()
        }
    };

    Ok(RegistryDocument {
        title: params.title,
        updated: params.updated,
        records,
    })
}

/// Decodes `protocol-numbers.xml` into its flat record list.
pub fn decode_protocol_numbers(body: &[u8]) -> Result<RegistryDocument<ProtocolRecord>> {
    let numbers: ProtocolNumbers = quick_xml::de::from_reader(body)?;
    debug!(
        "Decoded '{}' with {} records",
        numbers.registry.title,
        numbers.registry.records.len()
    );

    Ok(RegistryDocument {
        title: numbers.title,
        updated: numbers.updated,
        records: numbers.registry.records,
    })
}
