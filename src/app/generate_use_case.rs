use std::fmt::Write;

use tracing::{debug, info, info_span, Instrument};

use crate::app::ports::RegistryFetcher;
use crate::canonical::{canonicalize_icmp_types, canonicalize_protocols};
use crate::common::error::Result;
use crate::config::{Config, RecordKind, RegistrySource};
use crate::emit::{begin_document, emit_icmp_types, emit_protocols, end_document, format_source};
use crate::registry::{decode_icmp_parameters, decode_protocol_numbers};

/// Use case for turning the configured registries into one formatted
/// Rust source file.
pub struct GenerateUseCase {
    fetcher: Box<dyn RegistryFetcher>,
    sources: Vec<RegistrySource>,
    module: String,
}

impl GenerateUseCase {
    pub fn new(fetcher: Box<dyn RegistryFetcher>, sources: Vec<RegistrySource>, module: impl Into<String>) -> Self {
        Self {
            fetcher,
            sources,
            module: module.into(),
        }
    }

    pub fn from_config(fetcher: Box<dyn RegistryFetcher>, config: &Config) -> Self {
        Self::new(fetcher, config.registries.clone(), config.module.clone())
    }

    /// Processes every registry in order and returns the formatted source.
    ///
    /// The first failure aborts the run; nothing is returned for the
    /// registries that did succeed.
    pub async fn run(&self) -> Result<String> {
        let mut out = String::new();
        begin_document(&mut out, &self.module)?;

        for source in &self.sources {
            let span = info_span!("registry", kind = %source.kind, url = %source.url);
            self.generate_registry(&mut out, source).instrument(span).await?;
            writeln!(out)?;
        }

        end_document(&mut out)?;
        debug!("Formatting {} bytes of generated source", out.len());
        format_source(&out)
    }

    /// Fetch, decode, canonicalize and emit a single registry.
    async fn generate_registry(&self, out: &mut String, source: &RegistrySource) -> Result<usize> {
        let body = self.fetcher.fetch(&source.url).await?;

        let count = match source.kind {
            RecordKind::Icmpv4Type => {
                let doc = decode_icmp_parameters(&body)?;
                let types = canonicalize_icmp_types(&doc.records);
                debug!("{} of {} ICMP records kept", types.len(), doc.records.len());
                emit_icmp_types(out, &doc.title, &doc.updated, &types)?
            }
            RecordKind::ProtocolNumber => {
                let doc = decode_protocol_numbers(&body)?;
                let protocols = canonicalize_protocols(&doc.records);
                emit_protocols(out, &doc.title, &doc.updated, &protocols)?
            }
        };

        info!("Emitted {} constants", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::CodegenError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct RecordingFetcher {
        body: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl RegistryFetcher for RecordingFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(url.to_string());
            if url.contains("missing") {
                return Err(CodegenError::Status {
                    status: 404,
                    url: url.to_string(),
                });
            }
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const PROTOCOLS: &str = r#"<registry>
  <title>Protocol Numbers</title>
  <updated>2023-11-08</updated>
  <registry>
    <title>Assigned Internet Protocol Numbers</title>
    <record><value>6</value><name>TCP</name><description>Transmission Control</description></record>
  </registry>
</registry>"#;

    #[tokio::test]
    async fn registries_are_fetched_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let fetcher = RecordingFetcher {
            body: PROTOCOLS,
            calls: calls.clone(),
        };
        let use_case = GenerateUseCase::new(
            Box::new(fetcher),
            vec![
                RegistrySource::new("https://a.example/one.xml", RecordKind::ProtocolNumber),
                RegistrySource::new("https://b.example/two.xml", RecordKind::ProtocolNumber),
            ],
            "net",
        );

        let output = use_case.run().await.unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["https://a.example/one.xml", "https://b.example/two.xml"]
        );
        assert!(output.contains("pub mod net {"));
        assert!(output.contains("pub const IanaProtocolTCP: u8 = 6;"));
    }

    #[tokio::test]
    async fn first_failure_stops_the_run() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let fetcher = RecordingFetcher {
            body: PROTOCOLS,
            calls: calls.clone(),
        };
        let use_case = GenerateUseCase::new(
            Box::new(fetcher),
            vec![
                RegistrySource::new("https://a.example/missing.xml", RecordKind::ProtocolNumber),
                RegistrySource::new("https://b.example/two.xml", RecordKind::ProtocolNumber),
            ],
            "net",
        );

        let err = use_case.run().await.unwrap_err();

        assert!(matches!(err, CodegenError::Status { status: 404, .. }));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn decode_errors_abort_the_run() {
        let fetcher = RecordingFetcher {
            body: "<registry><title>",
            calls: Arc::new(Mutex::new(Vec::new())),
        };
        let use_case = GenerateUseCase::from_config(Box::new(fetcher), &Config::default());

        let err = use_case.run().await.unwrap_err();
        assert!(matches!(err, CodegenError::Xml(_)));
    }
}
