use crate::error::Result;
use serde::de::DeserializeOwned;

pub const PER_PAGE: u32 = 100;

/// One page of a list endpoint plus the number of the page after it, if any.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<u32>,
}

/// Anything that can serve a numbered page of a list endpoint.
pub trait PageSource {
    fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        page: u32,
    ) -> Result<Page<T>>;
}

/// Lazy walk over every item of a paginated endpoint.
///
/// Pages are requested only when the previous one is drained. The first error
/// is yielded once and ends the iteration.
pub struct Pages<'a, S, T> {
    source: &'a S,
    path: String,
    query: Vec<(&'static str, String)>,
    what: &'static str,
    subject: String,
    next: Option<u32>,
    buffer: std::vec::IntoIter<T>,
}

impl<'a, S: PageSource, T: DeserializeOwned> Pages<'a, S, T> {
    pub fn new(
        source: &'a S,
        path: String,
        what: &'static str,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            source,
            path,
            query: Vec::new(),
            what,
            subject: subject.into(),
            next: Some(1),
            buffer: Vec::new().into_iter(),
        }
    }

    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    fn fetch(&mut self, page: u32) -> Result<()> {
        tracing::info!(subject = %self.subject, page, "fetching {}", self.what);
        let query: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        let Page { items, next } = self.source.fetch_page::<T>(&self.path, &query, page)?;
        // Guard against a server pointing back at a page already read.
        self.next = next.filter(|n| *n > page);
        self.buffer = items.into_iter();
        Ok(())
    }
}

impl<S: PageSource, T: DeserializeOwned> Iterator for Pages<'_, S, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            let page = self.next.take()?;
            if let Err(e) = self.fetch(page) {
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContribError;
    use crate::github::fixture::FixtureSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn numbers<'a>(source: &'a FixtureSource) -> Pages<'a, FixtureSource, u32> {
        Pages::new(source, "/numbers".to_string(), "numbers", "test")
    }

    #[test]
    fn follows_next_page_until_exhausted() {
        let source = FixtureSource::default()
            .page("/numbers", 1, json!([1, 2]), Some(2))
            .page("/numbers", 2, json!([3]), None);

        let items: Vec<u32> = numbers(&source).collect::<Result<_>>().unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(
            *source.calls.borrow(),
            vec![("/numbers".to_string(), 1), ("/numbers".to_string(), 2)]
        );
    }

    #[test]
    fn is_lazy() {
        let source = FixtureSource::default()
            .page("/numbers", 1, json!([1, 2]), Some(2))
            .page("/numbers", 2, json!([3]), None);

        let first: Vec<u32> = numbers(&source).take(2).collect::<Result<_>>().unwrap();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(source.calls.borrow().len(), 1);
    }

    #[test]
    fn empty_pages_are_skipped() {
        let source = FixtureSource::default()
            .page("/numbers", 1, json!([]), Some(2))
            .page("/numbers", 2, json!([7]), None);

        let items: Vec<u32> = numbers(&source).collect::<Result<_>>().unwrap();
        assert_eq!(items, vec![7]);
    }

    #[test]
    fn error_ends_iteration() {
        let source = FixtureSource::default()
            .page("/numbers", 1, json!([1]), Some(2))
            .fail("/numbers", 2, 502);

        let mut pages = numbers(&source);
        assert_eq!(pages.next().unwrap().unwrap(), 1);
        assert!(matches!(
            pages.next(),
            Some(Err(ContribError::Api { status: 502, .. }))
        ));
        assert!(pages.next().is_none());
        assert_eq!(source.calls.borrow().len(), 2);
    }

    #[test]
    fn backwards_next_page_stops() {
        let source = FixtureSource::default().page("/numbers", 1, json!([1]), Some(1));

        let items: Vec<u32> = numbers(&source).collect::<Result<_>>().unwrap();
        assert_eq!(items, vec![1]);
        assert_eq!(source.calls.borrow().len(), 1);
    }
}
