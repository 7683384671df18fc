pub mod client;
pub mod contributors;
pub mod paginate;
pub mod repos;

pub use client::GitHubClient;
pub use contributors::list_contributors;
pub use paginate::{Page, PageSource, Pages, PER_PAGE};
pub use repos::list_repositories;
