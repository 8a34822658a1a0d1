use crate::fixtures::fixture_people;
use crate::generator::PersonGenerator;
use crate::person::Person;
use crate::PersonSearchEngine;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_RECORD_COUNT: usize = 100_000;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Generated people, not counting fixtures.
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct InitReport {
    pub created: bool,
    pub generated: usize,
    pub fixtures: usize,
}

impl std::fmt::Display for InitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.created {
            write!(
                f,
                "Created store: {} generated + {} fixture people",
                self.generated, self.fixtures
            )
        } else {
            write!(f, "Store already exists; population skipped")
        }
    }
}

/// Opens the store at `db_path`, creating and populating it first if the
/// file does not exist yet. An existing file is never repopulated.
pub fn initialize(db_path: &Path, options: &SeedOptions) -> Result<(PersonSearchEngine, InitReport)> {
    if db_path.exists() {
        let engine = PersonSearchEngine::new(db_path)?;
        let report = InitReport::default();
        info!(path = %db_path.display(), "{report}");
        return Ok((engine, report));
    }

    let people = seed_people(options);
    let engine = create_store(db_path, &people)?;
    let report = InitReport {
        created: true,
        generated: options.count,
        fixtures: people.len() - options.count,
    };
    info!(path = %db_path.display(), "{report}");
    Ok((engine, report))
}

/// Creates a new store file holding exactly `people`. If anything fails
/// after the file was created, the file is removed again.
pub fn create_store(db_path: &Path, people: &[Person]) -> Result<PersonSearchEngine> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let created = PersonSearchEngine::new(db_path).and_then(|engine| {
        engine.store().bulk_insert(people)?;
        Ok(engine)
    });

    created.map_err(|e| {
        if let Err(remove_err) = std::fs::remove_file(db_path) {
            warn!(path = %db_path.display(), error = %remove_err, "Failed to remove partial store");
        }
        e.context(format!("Failed to create store at {}", db_path.display()))
    })
}

/// Inserts generated people plus the fixtures into an already open store,
/// in a single transaction.
pub fn populate(engine: &PersonSearchEngine, options: &SeedOptions) -> Result<InitReport> {
    let people = seed_people(options);
    engine.store().bulk_insert(&people)?;
    Ok(InitReport {
        created: true,
        generated: options.count,
        fixtures: people.len() - options.count,
    })
}

/// `options.count` generated people followed by the fixtures.
pub fn seed_people(options: &SeedOptions) -> Vec<Person> {
    let mut people = PersonGenerator::new(options.seed).generate(options.count);
    people.extend(fixture_people());
    people
}
