//! Subcommand implementations.

use std::path::{Path, PathBuf};

use pomhelper_application::ModelError;
use pomhelper_domain::{Model, SortedProperties, WriterSettings};
use pomhelper_infrastructure::maven;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Cli, Commands};

/// Errors reported by the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading or writing a descriptor failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The settings file could not be read.
    #[error("cannot read settings file {}: {source}", path.display())]
    ConfigIo {
        /// Settings file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML for [`WriterSettings`].
    #[error("invalid settings file {}: {source}", path.display())]
    ConfigFormat {
        /// Settings file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON output failed.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads writer settings from `path`, or the defaults when no file is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<WriterSettings, CliError> {
    let Some(path) = path else {
        return Ok(WriterSettings::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| CliError::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    let output = cli.output.as_deref();

    match &cli.command {
        Commands::Sort(args) => {
            let model = maven::read_model(&args.pom)?;
            save(&model, output, settings)?;
        }
        Commands::SetProperty(args) => {
            let mut model = maven::read_model(&args.pom)?;
            match model.properties.insert(args.key.as_str(), args.value.as_str()) {
                Some(previous) => info!(key = %args.key, %previous, "replacing property"),
                None => info!(key = %args.key, "adding property"),
            }
            save(&model, output, settings)?;
        }
        Commands::RemoveProperty(args) => {
            let mut model = maven::read_model(&args.pom)?;
            if model.properties.remove(&args.key).is_none() {
                warn!(key = %args.key, "property not present");
            }
            save(&model, output, settings)?;
        }
        Commands::Show(args) => {
            let model = maven::read_model(&args.pom)?;
            let summary = ModelSummary::from(&model);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.to_text());
            }
        }
    }
    Ok(())
}

fn save(model: &Model, output: Option<&Path>, settings: WriterSettings) -> Result<(), CliError> {
    let target = match output {
        Some(path) => {
            maven::write_model_to_with_settings(model, path, settings)?;
            path.to_path_buf()
        }
        None => maven::write_model_with_settings(model, settings)?,
    };
    info!(path = %target.display(), "descriptor written");
    Ok(())
}

/// What `show` prints.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    /// `groupId:artifactId:packaging:version`.
    pub id: String,
    /// Parent id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Parent relative path as written in the descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    /// Where the parent descriptor is expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_pom: Option<PathBuf>,
    /// Properties in key order.
    pub properties: SortedProperties,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id(),
            parent: model.parent.as_ref().map(pomhelper_domain::Parent::id),
            relative_path: model
                .parent
                .as_ref()
                .and_then(|parent| parent.relative_path.clone()),
            parent_pom: model.parent_pom_path(),
            properties: model.properties.clone(),
        }
    }
}

impl ModelSummary {
    /// Plain-text rendering, one fact per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = format!("id: {}\n", self.id);
        if let Some(parent) = &self.parent {
            text.push_str(&format!("parent: {parent}\n"));
        }
        if let Some(relative_path) = &self.relative_path {
            text.push_str(&format!("relativePath: {relative_path}\n"));
        }
        if let Some(parent_pom) = &self.parent_pom {
            text.push_str(&format!("parent pom: {}\n", parent_pom.display()));
        }
        if !self.properties.is_empty() {
            text.push_str("properties:\n");
            for (key, value) in &self.properties {
                text.push_str(&format!("  {key} = {value}\n"));
            }
        }
        text
    }
}
