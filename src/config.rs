use std::path::PathBuf;

/// Client configuration, read once at process start and injected into
/// [`ProjectClient`](crate::client::ProjectClient).
///
/// An absent or empty `PROJECTS_API_URL` means "unconfigured": listing falls
/// back to the local mock file and write operations fail up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the projects API, trailing slash stripped. `None` when
    /// unconfigured.
    pub api_base: Option<String>,
    /// Path of the local mock listing used when no API base is set.
    pub mock_path: PathBuf,
}

/// Default location of the mock listing fixture.
pub const DEFAULT_MOCK_PATH: &str = "mock/projects.json";

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base = std::env::var("PROJECTS_API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|url| {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("PROJECTS_API_URL must start with http:// or https://");
                }
                url::Url::parse(&url)
                    .map_err(|e| anyhow::anyhow!("PROJECTS_API_URL is not a valid URL: {}", e))?;
                Ok(url.trim_end_matches('/').to_string())
            })
            .transpose()?;

        let mock_path = std::env::var("PROJECTS_MOCK_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MOCK_PATH));

        let config = Self {
            api_base,
            mock_path,
        };

        tracing::info!("Configuration loaded successfully");
        match &config.api_base {
            Some(base) => tracing::debug!("Projects API base URL: {}", base),
            None => tracing::info!(
                "PROJECTS_API_URL not set, listing falls back to {}",
                config.mock_path.display()
            ),
        }

        Ok(config)
    }

    /// Configuration with no API base: mock listing, writes rejected.
    pub fn unconfigured() -> Self {
        Self {
            api_base: None,
            mock_path: PathBuf::from(DEFAULT_MOCK_PATH),
        }
    }

    /// Configuration pointing at the given base URL (trailing slash stripped).
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            api_base: Some(base.trim_end_matches('/').to_string()),
            mock_path: PathBuf::from(DEFAULT_MOCK_PATH),
        }
    }
}
