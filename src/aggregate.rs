use crate::model::{Aggregate, Contributor, RawContributor};

/// Running merge of contributor records across repositories.
#[derive(Debug, Default)]
pub struct Aggregator {
    contributors: Aggregate,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record in. Non-user accounts are ignored; the first sighting of
    /// a login fixes its id and avatar.
    pub fn add(&mut self, raw: RawContributor) {
        if !raw.is_user() {
            return;
        }
        match self.contributors.get_mut(&raw.login) {
            Some(existing) => existing.merge(&raw),
            None => {
                self.contributors
                    .insert(raw.login.clone(), Contributor::new(raw));
            }
        }
    }

    pub fn finish(self) -> Aggregate {
        self.contributors
    }
}

impl Extend<RawContributor> for Aggregator {
    fn extend<I: IntoIterator<Item = RawContributor>>(&mut self, iter: I) {
        for raw in iter {
            self.add(raw);
        }
    }
}

pub fn aggregate<I: IntoIterator<Item = RawContributor>>(records: I) -> Aggregate {
    let mut aggregator = Aggregator::new();
    aggregator.extend(records);
    aggregator.finish()
}
