use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mc_version_check::output::{self, OutputFormat};
use mc_version_check::version::resolver::VersionResolver;
use mc_version_check::version::semver::is_supported_release;

#[derive(Parser)]
#[command(name = "mc-version-check")]
#[command(version, about = "Resolves compatible Minecraft/Yarn/Fabric API/Paper version sets")]
struct Cli {
    /// Minecraft versions to check (e.g. 1.21.5); checks the newest
    /// supported releases when omitted
    versions: Vec<String>,

    /// Emit the report as JSON (default)
    #[arg(long, group = "format")]
    json: bool,

    /// Emit a gradle.properties blob for the selected version
    #[arg(long, group = "format")]
    gradle: bool,

    /// Emit a GitHub Actions version matrix snippet
    #[arg(long, group = "format")]
    workflow: bool,

    /// Version to select for --gradle output (defaults to the newest resolved)
    #[arg(long, value_name = "VERSION")]
    target: Option<String>,

    /// Write the output to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.gradle {
            OutputFormat::Gradle
        } else if self.workflow {
            OutputFormat::Workflow
        } else {
            OutputFormat::Json
        }
    }

    /// Positional args that look like version ids; anything else is ignored
    /// with a warning
    fn version_filter(&self) -> Vec<String> {
        let mut filter = Vec::new();
        for arg in &self.versions {
            if is_supported_release(arg) {
                filter.push(arg.clone());
            } else {
                warn!("Ignoring unsupported version argument: {}", arg);
            }
        }
        filter
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let resolver = VersionResolver::default();

    let filter = cli.version_filter();
    let report = resolver
        .resolve_all(if filter.is_empty() { None } else { Some(&filter) })
        .await;

    let rendered = match cli.format() {
        OutputFormat::Json => output::render_json(&report)?,
        OutputFormat::Gradle => output::render_gradle(&report, cli.target.as_deref())?,
        OutputFormat::Workflow => output::render_workflow(&report),
    };

    match &cli.save {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Saved output to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    let complete: Vec<_> = report
        .values()
        .filter(|r| r.is_complete())
        .map(|r| r.minecraft.as_str())
        .collect();
    info!(
        "{}/{} versions fully supported: {}",
        complete.len(),
        report.len(),
        complete.join(", ")
    );

    Ok(())
}
