use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".resxrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the strings.xml file, relative to the project root.
    #[serde(default = "default_resources_path")]
    pub resources_path: String,
    /// Package the generated resource accessors live in.
    #[serde(default = "default_resources_package")]
    pub resources_package: String,
    /// Gradle task that regenerates resource accessors after a write.
    #[serde(default = "default_build_task")]
    pub build_task: String,
    /// Language id the extraction quick-action is offered for.
    #[serde(default = "default_source_language")]
    pub source_language: String,
    /// Line terminator used when splicing text. May need to be \r\n on
    /// Windows checkouts without autocrlf.
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,
    /// Keybinding hint for editor integrations; not used by the CLI itself.
    #[serde(default = "default_keybinding")]
    pub keybinding: String,
}

fn default_resources_path() -> String {
    "composeApp/src/commonMain/composeResources/values/strings.xml".to_string()
}

fn default_resources_package() -> String {
    "com.sampleapp.composeapp.generated.resources".to_string()
}

fn default_build_task() -> String {
    "generateResourceAccessorsForCommonMain".to_string()
}

fn default_source_language() -> String {
    "kotlin".to_string()
}

fn default_line_terminator() -> String {
    "\n".to_string()
}

fn default_keybinding() -> String {
    "ctrl alt R".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources_path: default_resources_path(),
            resources_package: default_resources_package(),
            build_task: default_build_task(),
            source_language: default_source_language(),
            line_terminator: default_line_terminator(),
            keybinding: default_keybinding(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.resources_path.trim().is_empty(),
            "'resourcesPath' must not be empty"
        );
        anyhow::ensure!(
            !self.resources_package.trim().is_empty(),
            "'resourcesPackage' must not be empty"
        );
        anyhow::ensure!(
            self.line_terminator == "\n" || self.line_terminator == "\r\n",
            "'lineTerminator' must be \"\\n\" or \"\\r\\n\""
        );
        Ok(())
    }

    /// Absolute path of the resource file under `project_root`.
    pub fn resources_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.resources_path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
