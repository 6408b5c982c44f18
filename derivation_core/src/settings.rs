//! Run settings, loaded from TOML.

use std::path::{Path, PathBuf};

use magic_records::LayerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::known::{OUTPUT, TEMPLATES};

/// Errors raised while loading or checking settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no participating layers configured")]
    NoParticipatingLayers,

    #[error("template layer {0} is not in the load order")]
    MissingTemplateLayer(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Layers whose staves and scrolls are derived from.
    pub participating_layers: Vec<String>,

    /// Layer derived records are written to.
    #[serde(default = "default_output_layer")]
    pub output_layer: String,

    /// Layer providing the staff and scroll templates.
    #[serde(default = "default_template_layer")]
    pub template_layer: String,

    /// JSON layer files, in load order.
    #[serde(default)]
    pub load_order: Vec<PathBuf>,

    /// Where the output layer is written. Defaults to `<output_layer>.json`.
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    #[serde(default)]
    pub pipelines: PipelineToggles,
}

/// Which pipelines run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineToggles {
    #[serde(default = "default_true")]
    pub staves: bool,

    #[serde(default = "default_true")]
    pub scrolls: bool,
}

impl Default for PipelineToggles {
    fn default() -> Self {
        Self {
            staves: true,
            scrolls: true,
        }
    }
}

fn default_output_layer() -> String {
    OUTPUT.to_string()
}

fn default_template_layer() -> String {
    TEMPLATES.to_string()
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Settings with defaults for everything but the participating layers.
    pub fn new<S: Into<String>>(participating_layers: impl IntoIterator<Item = S>) -> Self {
        Self {
            participating_layers: participating_layers.into_iter().map(Into::into).collect(),
            output_layer: default_output_layer(),
            template_layer: default_template_layer(),
            load_order: Vec::new(),
            output_path: None,
            pipelines: PipelineToggles::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Where the output layer is written.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", self.output_layer)))
    }

    /// Check the run can start: at least one participating layer, and the template
    /// layer loaded.
    pub fn check_runnable<'a>(
        &self,
        loaded: impl IntoIterator<Item = &'a LayerId>,
    ) -> Result<(), SettingsError> {
        if self.participating_layers.is_empty() {
            return Err(SettingsError::NoParticipatingLayers);
        }
        if !loaded
            .into_iter()
            .any(|layer| layer.as_str() == self.template_layer)
        {
            return Err(SettingsError::MissingTemplateLayer(self.template_layer.clone()));
        }
        Ok(())
    }
}
