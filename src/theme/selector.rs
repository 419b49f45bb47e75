//! Picks a theme from the execution environment.

use tracing::debug;

use super::{presets, ColorTheme};

/// CI providers with a known log renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    AzurePipelines,
    AppVeyor,
    GitLab,
    TeamCity,
    GitHubActions,
}

impl CiProvider {
    /// Detection order.
    pub const ALL: [CiProvider; 5] = [
        CiProvider::AzurePipelines,
        CiProvider::AppVeyor,
        CiProvider::GitLab,
        CiProvider::TeamCity,
        CiProvider::GitHubActions,
    ];

    /// Variable the provider sets on its build agents.
    pub fn marker(self) -> &'static str {
        match self {
            CiProvider::AzurePipelines => "TF_BUILD",
            CiProvider::AppVeyor => "APPVEYOR",
            CiProvider::GitLab => "GITLAB_CI",
            CiProvider::TeamCity => "TEAMCITY_VERSION",
            CiProvider::GitHubActions => "GITHUB_ACTIONS",
        }
    }

    fn theme(self) -> ColorTheme {
        match self {
            CiProvider::AzurePipelines => presets::azure_pipelines(),
            CiProvider::AppVeyor => presets::appveyor(),
            CiProvider::GitLab | CiProvider::TeamCity | CiProvider::GitHubActions => {
                presets::ansi_256()
            }
        }
    }
}

/// Environment signals consumed by [`select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub ci: Option<CiProvider>,
    /// Declared terminal type, as in `TERM`.
    pub term: Option<String>,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ci = CiProvider::ALL
            .into_iter()
            .find(|provider| lookup(provider.marker()).is_some());
        Self {
            ci,
            term: lookup("TERM"),
        }
    }

    fn is_xterm(&self) -> bool {
        self.term
            .as_deref()
            .and_then(|term| term.get(..5))
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xterm"))
    }
}

/// Chooses the theme for `env`. Every environment gets exactly one theme.
pub fn select(env: &Environment) -> ColorTheme {
    let theme = if let Some(provider) = env.ci {
        provider.theme()
    } else if env.is_xterm() {
        presets::ansi_256()
    } else {
        presets::legacy_console()
    };
    debug!(theme = theme.name(), ci = ?env.ci, term = ?env.term, "selected console theme");
    theme
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::theme::Backend;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn providers_win_over_terminal() {
        let theme = select(&env(&[("TF_BUILD", "True"), ("TERM", "dumb")]));
        assert_eq!(theme.name(), "azure-pipelines");

        let theme = select(&env(&[("APPVEYOR", "True"), ("TERM", "xterm")]));
        assert_eq!(theme.name(), "appveyor");
    }

    #[test]
    fn detection_follows_provider_order() {
        let env = env(&[("GITHUB_ACTIONS", "true"), ("TF_BUILD", "True")]);
        assert_eq!(env.ci, Some(CiProvider::AzurePipelines));
    }

    #[test]
    fn generic_providers_use_256_colors() {
        for marker in ["GITLAB_CI", "TEAMCITY_VERSION", "GITHUB_ACTIONS"] {
            let theme = select(&env(&[(marker, "1")]));
            assert_eq!(theme.backend(), Backend::Ansi256, "{}", marker);
        }
    }

    #[test]
    fn xterm_prefix_is_case_insensitive() {
        assert_eq!(select(&env(&[("TERM", "xterm-256color")])).backend(), Backend::Ansi256);
        assert_eq!(select(&env(&[("TERM", "XTerm")])).backend(), Backend::Ansi256);
        assert_eq!(select(&env(&[("TERM", "xter")])).backend(), Backend::LegacyConsole);
        assert_eq!(select(&env(&[("TERM", "screen")])).backend(), Backend::LegacyConsole);
    }

    #[test]
    fn falls_back_to_legacy_console() {
        assert_eq!(select(&Environment::default()).backend(), Backend::LegacyConsole);
    }

    #[test]
    fn selection_is_idempotent() {
        let env = Environment::from_env();
        let first = select(&env);
        let second = select(&env);
        assert_eq!(first, second);
        for role in crate::theme::StyleRole::ALL {
            assert_eq!(first.resolve(role), second.resolve(role));
        }
    }
}
