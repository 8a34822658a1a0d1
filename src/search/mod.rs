pub mod tokenizer;

use crate::person::Person;
use crate::store::PersonStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

pub use tokenizer::tokenize;

/// Maximum number of rows a search returns.
pub const MAX_RESULTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub display_name: String,
    pub match_count: usize,
}

struct IndexedPerson {
    person: Person,
    /// first, middle, last, preferred; lowercased once at load time.
    lowered: [String; 4],
}

impl IndexedPerson {
    fn new(person: Person) -> Self {
        let lowered = person.name_fields().map(str::to_lowercase);
        Self { person, lowered }
    }

    fn match_count(&self, terms: &[&str]) -> usize {
        terms
            .iter()
            .filter(|term| self.lowered.iter().any(|field| field.starts_with(**term)))
            .count()
    }
}

/// Ranks people by how many distinct query terms prefix-match one of their
/// four name fields.
pub struct QueryRanker {
    people: Vec<IndexedPerson>,
}

impl QueryRanker {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: people.into_iter().map(IndexedPerson::new).collect(),
        }
    }

    pub fn load(store: &PersonStore) -> Result<Self> {
        Ok(Self::new(store.all_people()?))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Top [`MAX_RESULTS`] people with at least one matching term, best
    /// first. Order among equal scores is unspecified.
    pub fn search(&self, raw_query: &str) -> Vec<ScoredResult> {
        let tokens = tokenize(raw_query);
        let mut seen = HashSet::new();
        let terms: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect();

        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, &IndexedPerson)> = self
            .people
            .iter()
            .filter_map(|p| {
                let count = p.match_count(&terms);
                (count > 0).then_some((count, p))
            })
            .collect();

        hits.sort_by(|a, b| b.0.cmp(&a.0));
        let total_hits = hits.len();
        hits.truncate(MAX_RESULTS);

        debug!(terms = terms.len(), total_hits, returned = hits.len(), "search complete");

        hits.into_iter()
            .map(|(match_count, p)| ScoredResult {
                id: p.person.id.clone(),
                display_name: p.person.display_name(),
                match_count,
            })
            .collect()
    }
}
