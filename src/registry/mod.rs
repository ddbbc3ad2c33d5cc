// Registry documents: serde model and decoding per registry kind

pub mod decode;
pub mod model;

pub use decode::{decode_icmp_parameters, decode_protocol_numbers, RegistryDocument};
pub use model::{IcmpRecord, ProtocolRecord};
