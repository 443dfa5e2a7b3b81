use crate::cli::Cli;
use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::DEFAULT_BASE_URL;
use points_core::{Scope, View};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Configuration as merged from files, environment and flags
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// GitHub token
    pub token: Option<String>,
    /// API base URL (GitHub Enterprise or a test server)
    pub api_url: Option<String>,
    pub org: Option<String>,
    pub label: Option<String>,
    /// Explicit repositories, as `owner/name`
    ///
    /// Also accepts one comma-separated string, as `POINTS_REPOS` provides.
    #[serde(default, deserialize_with = "list_or_comma_separated")]
    pub repos: Vec<String>,
}

/// Validated settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub token: String,
    pub api_url: String,
    pub label: String,
    pub scopes: Vec<Scope>,
    pub view: View,
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(config_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // GITHUB_AUTH_TOKEN is the conventional variable; POINTS_* wins over it
        figment = figment
            .merge(Env::raw().only(&["GITHUB_AUTH_TOKEN"]).map(|_| "token".into()))
            .merge(Env::prefixed("POINTS_").ignore(&["CONFIG"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(org) = &cli.org {
            self.org = Some(org.clone());
            self.repos.clear();
        }
        if !cli.repos.is_empty() {
            self.repos = cli.repos.clone();
            self.org = None;
        }
        if let Some(label) = &cli.label {
            self.label = Some(label.clone());
        }
    }

    /// Check that everything a run needs is present.
    ///
    /// The token is checked first so a missing credential is reported
    /// before any other problem.
    pub fn validate(self, view: View) -> Result<Settings> {
        let token = non_empty(self.token).ok_or_else(|| {
            anyhow!(
                "GitHub token not configured. Set GITHUB_AUTH_TOKEN, POINTS_TOKEN, or `token` in the config file"
            )
        })?;

        let label = non_empty(self.label).ok_or_else(|| {
            anyhow!("Label not configured. Pass --label, set POINTS_LABEL, or `label` in the config file")
        })?;

        let scopes = if !self.repos.is_empty() {
            self.repos
                .iter()
                .map(|r| parse_repo(r))
                .collect::<Result<Vec<_>>>()?
        } else if let Some(org) = non_empty(self.org) {
            vec![Scope::Organization(org)]
        } else {
            return Err(anyhow!(
                "Organization not configured. Pass --org or --repo, set POINTS_ORG, or `org` in the config file"
            ));
        };

        let api_url = non_empty(self.api_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Settings {
            token,
            api_url,
            label,
            scopes,
            view,
        })
    }
}

fn list_or_comma_separated<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repos {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Repos::deserialize(deserializer)? {
        Repos::List(list) => list,
        Repos::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an `owner/name` repository reference
fn parse_repo(spec: &str) -> Result<Scope> {
    match spec.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(Scope::Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(anyhow!(
            "Invalid repository '{}': expected OWNER/NAME",
            spec
        )),
    }
}

/// Config files in merge order, later files overriding earlier ones
fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let candidates = [
        ProjectDirs::from("", "", "points").map(|d| d.config_dir().join("config.toml")),
        user_config_dir().map(|dir| dir.join("points").join("config.toml")),
        std::env::current_dir().ok().map(|dir| dir.join(".points.toml")),
    ];

    let mut paths: Vec<PathBuf> = Vec::new();
    for path in candidates.into_iter().flatten() {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

/// `$XDG_CONFIG_HOME`, else `~/.config`
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join(".config")))
}
