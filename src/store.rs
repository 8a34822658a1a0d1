use crate::person::Person;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_PERSON_SQL: &str = "SELECT person_id, first_name, middle_name, last_name, preferred_name,
        email_address, account_name, account_id
 FROM person";

pub struct PersonStore {
    db: Arc<Mutex<Connection>>,
}

impl PersonStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    /// Inserts every person in one transaction. Any failing row rolls the
    /// whole batch back.
    pub fn bulk_insert(&self, people: &[Person]) -> Result<usize> {
        let mut conn = self.db.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO person
                 (person_id, first_name, middle_name, last_name, preferred_name, email_address, account_name, account_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for person in people {
                stmt.execute(params![
                    person.id,
                    person.first_name,
                    person.middle_name,
                    person.last_name,
                    person.preferred_name,
                    person.email,
                    person.account_name,
                    person.account_id,
                ])
                .with_context(|| format!("Failed to insert person {}", person.id))?;
            }
        }
        tx.commit()?;
        Ok(people.len())
    }

    pub fn all_people(&self) -> Result<Vec<Person>> {
        let conn = self.db.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let mut stmt = conn.prepare(&format!("{SELECT_PERSON_SQL} ORDER BY person_id"))?;
        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_person(&self, id: &str) -> Result<Option<Person>> {
        let conn = self.db.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let mut stmt = conn.prepare(&format!("{SELECT_PERSON_SQL} WHERE person_id = ?1"))?;
        let result = stmt
            .query_row(params![id], Self::map_row)
            .optional()
            .context("Failed to query person")?;
        Ok(result)
    }

    pub fn count(&self) -> Result<u64> {
        let conn = self.db.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Person> {
        Ok(Person {
            id: row.get(0)?,
            first_name: row.get(1)?,
            middle_name: row.get(2)?,
            last_name: row.get(3)?,
            preferred_name: row.get(4)?,
            email: row.get(5)?,
            account_name: row.get(6)?,
            account_id: row.get(7)?,
        })
    }
}

trait OptionalRow {
    fn optional(self) -> std::result::Result<Option<Person>, rusqlite::Error>;
}

impl OptionalRow for std::result::Result<Person, rusqlite::Error> {
    fn optional(self) -> std::result::Result<Option<Person>, rusqlite::Error> {
        match self {
            Ok(person) => Ok(Some(person)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
