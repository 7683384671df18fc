use crate::config::{Config, DEFAULT_API_URL};
use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contribmap")]
#[command(about = "Aggregate contributor statistics across an organization's public repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_parser = NonEmptyStringValueParser::new(), help = "Organization name")]
    pub org: String,

    #[arg(long, help = "Output file; .yaml/.yml writes YAML, .toml writes TOML, anything else JSON")]
    pub output: PathBuf,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the GitHub REST API")]
    pub api_url: String,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "Access token")]
    pub token: Option<String>,

    #[arg(long, default_value_t = 0, help = "Print the top N contributors after writing")]
    pub top: usize,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn config(&self) -> Config {
        Config::new(self.org.clone(), self.output.clone())
            .with_api_url(self.api_url.clone())
            .with_token(self.token.clone())
            .with_top(self.top)
    }

    pub fn execute(self) -> Result<()> {
        crate::contrib::exec(&self.config())
    }
}
