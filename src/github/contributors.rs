use super::paginate::{PageSource, Pages, PER_PAGE};
use crate::error::Result;
use crate::model::RawContributor;

/// Every contributor record of `org/repo`, bots and organizations included.
pub fn list_contributors<'a, S: PageSource>(
    source: &'a S,
    org: &str,
    repo: &str,
) -> impl Iterator<Item = Result<RawContributor>> + 'a {
    let path = format!("/repos/{org}/{repo}/contributors");
    Pages::<S, RawContributor>::new(source, path, "contributors", repo)
        .with_query("per_page", PER_PAGE.to_string())
}
