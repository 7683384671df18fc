use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::github::{list_contributors, list_repositories, GitHubClient, PageSource};
use crate::model::Aggregate;
use crate::output::{print_leaderboard, write_aggregate};
use anyhow::Context;

pub fn exec(config: &Config) -> anyhow::Result<()> {
    let client = GitHubClient::new(config).context("Failed to build GitHub client")?;

    let contributors = collect_contributors(&client, &config.org)?;

    let format = write_aggregate(&contributors, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    tracing::info!(
        contributors = contributors.len(),
        ?format,
        path = %config.output.display(),
        "wrote aggregate"
    );

    if config.top > 0 {
        print_leaderboard(&contributors, config.top);
    }

    Ok(())
}

/// Walks every non-fork repository of `org` in listing order and merges their
/// contributor lists. The first failing request aborts the whole walk.
pub fn collect_contributors<S: PageSource>(source: &S, org: &str) -> anyhow::Result<Aggregate> {
    let mut aggregator = Aggregator::new();

    for repo in list_repositories(source, org) {
        let repo = repo.with_context(|| format!("Failed to list repositories of {org:?}"))?;
        for raw in list_contributors(source, org, &repo.name) {
            let raw = raw.with_context(|| {
                format!("Failed to list contributors of {org}/{}", repo.name)
            })?;
            aggregator.add(raw);
        }
    }

    Ok(aggregator.finish())
}
