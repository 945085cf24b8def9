use crate::git::{CommitRange, repo_root};
use crate::notes::{FormatOptions, OutputFormat};
use crate::{log_debug, log_warn};

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for git-relnotes
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Branch whose commits are excluded (left side of the range)
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
    /// Branch whose new commits are listed (right side of the range)
    #[serde(default = "default_target_branch")]
    pub target_branch: String,
    /// Directory that receives the generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub include_date: bool,
    #[serde(default)]
    pub include_author: bool,
}

/// Contents of a project `.relnotesconfig`; only the keys present in the file apply
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub base_branch: Option<String>,
    pub target_branch: Option<String>,
    /// Relative paths are anchored at the repository root when loaded
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub include_date: Option<bool>,
    pub include_author: Option<bool>,
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_target_branch() -> String {
    "develop".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

/// Project configuration filename, looked up at the repository root
pub const PROJECT_CONFIG_FILENAME: &str = ".relnotesconfig";

impl Config {
    /// Load the personal configuration and merge the project file of `repo_path` over it
    pub fn load(repo_path: &Path) -> Result<Self> {
        let personal_path = Self::get_config_path();
        Self::load_from(personal_path.as_deref(), repo_path)
    }

    /// Same as [`Config::load`] with an explicit personal config location
    pub fn load_from(personal_path: Option<&Path>, repo_path: &Path) -> Result<Self> {
        let mut config = match personal_path {
            Some(path) if path.exists() => Self::read_file(path)?,
            _ => Self::default(),
        };

        match Self::load_project_config(repo_path) {
            Ok(Some(project_config)) => config.merge_with_project_config(project_config),
            Ok(None) => {}
            Err(e) => log_warn!("Ignoring project configuration: {}", e),
        }

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load project-specific configuration from the root of the repository
    /// containing `repo_path`, `None` when the file is absent
    pub fn load_project_config(repo_path: &Path) -> Result<Option<ProjectConfig>> {
        let root = repo_root(repo_path).unwrap_or_else(|e| {
            log_debug!("Using {} as project root: {}", repo_path.display(), e);
            repo_path.to_path_buf()
        });
        let config_path = root.join(PROJECT_CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let mut config: ProjectConfig = toml::from_str(&content).map_err(|e| {
            anyhow!(
                "Invalid project configuration file format: {}. Please check your {} file for syntax errors.",
                e,
                PROJECT_CONFIG_FILENAME
            )
        })?;

        // Absolute paths replace the root on join
        config.output_dir = config.output_dir.map(|dir| root.join(dir));
        Ok(Some(config))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Merge a project config over this one; every key set in the project file wins
    pub fn merge_with_project_config(&mut self, project_config: ProjectConfig) {
        log_debug!("Merging with project configuration");

        if let Some(base_branch) = project_config.base_branch {
            self.base_branch = base_branch;
        }
        if let Some(target_branch) = project_config.target_branch {
            self.target_branch = target_branch;
        }
        if let Some(output_dir) = project_config.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(format) = project_config.format {
            self.format = format;
        }
        if let Some(include_date) = project_config.include_date {
            self.include_date = include_date;
        }
        if let Some(include_author) = project_config.include_author {
            self.include_author = include_author;
        }
    }

    /// Get the path to the personal configuration file
    fn get_config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("git-relnotes").join("config.toml"))
    }

    /// The `base..target` range to extract
    pub fn commit_range(&self) -> CommitRange {
        CommitRange::new(self.base_branch.clone(), self.target_branch.clone())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            format: self.format,
            include_date: self.include_date,
            include_author: self.include_author,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_branch: default_base_branch(),
            target_branch: default_target_branch(),
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            include_date: false,
            include_author: false,
        }
    }
}
