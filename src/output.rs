//! Report renderers: JSON, gradle.properties, CI version matrix

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::config::LOADER_VERSION;
use crate::version::types::VersionReport;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No versions were resolved")]
    EmptyReport,

    #[error("Version data for {0} is incomplete")]
    Incomplete(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Gradle,
    Workflow,
}

/// Pretty-printed JSON serialization of the whole report
pub fn render_json(report: &VersionReport) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders a gradle.properties blob for `target`, defaulting to the newest
/// resolved version. Fails when the selected record is absent or partial;
/// this is the one fatal condition in the tool.
pub fn render_gradle(report: &VersionReport, target: Option<&str>) -> Result<String, RenderError> {
    render_gradle_at(report, target, Utc::now())
}

fn render_gradle_at(
    report: &VersionReport,
    target: Option<&str>,
    generated_at: DateTime<Utc>,
) -> Result<String, RenderError> {
    let target = match target {
        Some(t) => t.to_string(),
        None => report.keys().next().cloned().ok_or(RenderError::EmptyReport)?,
    };

    let record = report
        .get(&target)
        .ok_or_else(|| RenderError::Incomplete(target.clone()))?;

    let (Some(yarn), Some(fabric), Some(data_version)) = (
        record.yarn_mappings.as_deref(),
        record.fabric_api.as_deref(),
        record.data_version,
    ) else {
        return Err(RenderError::Incomplete(target));
    };

    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    Ok(format!(
        "# Done to increase the memory available to gradle.\n\
         org.gradle.jvmargs=-Xmx4G\n\
         \n\
         # Fabric Properties (auto-updated {timestamp})\n\
         minecraft_version={target}\n\
         yarn_mappings={yarn}\n\
         loader_version={LOADER_VERSION}\n\
         \n\
         # Mod Properties\n\
         mod_version=1.0.0-SNAPSHOT\n\
         maven_group=site.chococar\n\
         archives_base_name=chococars-inventory-bridge\n\
         \n\
         # Dependencies\n\
         fabric_version={fabric}\n\
         paper_version={paper}\n\
         data_version={data_version}\n\
         \n\
         # CI/CD Properties\n\
         ci_build=false",
        paper = record.paper,
    ))
}

/// Renders a GitHub Actions matrix snippet covering the fully resolved
/// versions: the matrix list plus a shell `case` exporting the dependency
/// versions for each entry.
pub fn render_workflow(report: &VersionReport) -> String {
    let complete: Vec<_> = report.values().filter(|r| r.is_complete()).collect();

    let matrix = complete
        .iter()
        .map(|r| format!("          - \"{}\"", r.minecraft))
        .collect::<Vec<_>>()
        .join("\n");

    let cases = complete
        .iter()
        .map(|r| {
            format!(
                "          \"{mc}\")\n\
                 \x20           echo \"YARN_VERSION={yarn}\" >> $GITHUB_ENV\n\
                 \x20           echo \"FABRIC_API_VERSION={fabric}\" >> $GITHUB_ENV\n\
                 \x20           echo \"PAPER_VERSION={paper}\" >> $GITHUB_ENV\n\
                 \x20           echo \"DATA_VERSION={data}\" >> $GITHUB_ENV\n\
                 \x20           ;;",
                mc = r.minecraft,
                yarn = r.yarn_mappings.as_deref().unwrap_or_default(),
                fabric = r.fabric_api.as_deref().unwrap_or_default(),
                paper = r.paper,
                data = r.data_version.unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "        minecraft_version:\n\
         {matrix}\n\
         \n\
         \x20       case \"$MC_VERSION\" in\n\
         {cases}\n\
         \x20       esac"
    )
}
