use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything a run needs, resolved once from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub org: String,
    pub output: PathBuf,
    pub api_url: String,
    pub token: Option<String>,
    pub top: usize,
}

impl Config {
    pub fn new(org: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            org: org.into(),
            output: output.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            top: 0,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        // An empty GITHUB_TOKEN behaves like an unset one.
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}
