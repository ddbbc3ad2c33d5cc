use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use iana_codegen::app::{GenerateUseCase, RegistryFetcher};
use iana_codegen::config::Config;
use iana_codegen::infra::{LocalFileFetcher, ReqwestFetcher};
use iana_codegen::observability;

#[derive(Parser)]
#[command(name = "iana_codegen")]
#[command(about = "Generate Rust constants from IANA protocol parameter registries")]
#[command(version)]
struct Cli {
    /// TOML file overriding the registry list, module name and HTTP settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Name of the module wrapping the generated declarations
    #[arg(long)]
    module: Option<String>,
    /// Read registry files from this directory instead of downloading them
    #[arg(long)]
    offline_dir: Option<PathBuf>,
    /// Also write JSON logs to a daily rotated file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = observability::init_logging(cli.log_dir.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(module) = cli.module {
        config.module = module;
        config.validate()?;
    }

    let fetcher: Box<dyn RegistryFetcher> = match cli.offline_dir {
        Some(dir) => {
            info!("Reading registries from {}", dir.display());
            Box::new(LocalFileFetcher::new(dir))
        }
        None => Box::new(ReqwestFetcher::new(&config.http)?),
    };

    let source = GenerateUseCase::from_config(fetcher, &config)
        .run()
        .await
        .context("code generation failed")?;

    // Only a fully generated file ever reaches stdout.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(source.as_bytes())?;
    stdout.flush()?;

    info!("Generated {} registries into module '{}'", config.registries.len(), config.module);
    Ok(())
}
