use super::paginate::{PageSource, Pages, PER_PAGE};
use crate::error::Result;
use crate::model::Repository;

/// Public, non-fork repositories of `org`, fetched page by page on demand.
pub fn list_repositories<'a, S: PageSource>(
    source: &'a S,
    org: &str,
) -> impl Iterator<Item = Result<Repository>> + 'a {
    Pages::<S, Repository>::new(source, format!("/orgs/{org}/repos"), "repos", org)
        .with_query("type", "public")
        .with_query("per_page", PER_PAGE.to_string())
        .filter(|repo: &Result<Repository>| !matches!(repo, Ok(r) if r.fork))
}
