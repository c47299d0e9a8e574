//! Configuration loading and management.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ep_core::SuggestionLimits;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_address: SocketAddr,

    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,

    /// Maximum unregistered events per user in a suggestion request.
    pub max_suggestion_candidates: usize,

    /// Maximum suggestion paths per request, across all users.
    pub max_suggestion_paths: usize,

    /// Maximum size of a suggestion response body, in bytes.
    pub max_suggestion_output_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let limits = SuggestionLimits::default();
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_body_bytes: 1024 * 1024,
            max_suggestion_candidates: limits.max_candidates,
            max_suggestion_paths: limits.max_paths,
            max_suggestion_output_bytes: limits.max_output_bytes,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(config_path).extract()
    }

    /// Builds the layered provider: defaults, user config file, explicit
    /// config file, then `EP_*` environment variables.
    ///
    /// The user config file is optional. An explicit file must exist.
    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("EP_"))
    }

    /// Limits handed to the suggestion engine.
    pub const fn suggestion_limits(&self) -> SuggestionLimits {
        SuggestionLimits {
            max_candidates: self.max_suggestion_candidates,
            max_paths: self.max_suggestion_paths,
            max_output_bytes: self.max_suggestion_output_bytes,
        }
    }
}

/// Returns the platform-specific config directory for ep.
///
/// On Linux: `~/.config/ep`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ep"))
}
