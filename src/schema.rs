use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TABLES_SQL)?;
    Ok(())
}

pub fn person_table_exists(conn: &Connection) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='person'",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// Column widths are advisory; SQLite does not enforce varchar lengths.
const CREATE_TABLES_SQL: &str = "
CREATE TABLE IF NOT EXISTS person (
    person_id      varchar(36) PRIMARY KEY,
    first_name     varchar(80) NOT NULL,
    middle_name    varchar(80),
    last_name      varchar(80) NOT NULL,
    preferred_name varchar(80),
    email_address  varchar(320) NOT NULL DEFAULT '',
    account_name   varchar(320) NOT NULL DEFAULT '',
    account_id     varchar(256) NOT NULL DEFAULT ''
);
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_without_error() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn person_table_created() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!person_table_exists(&conn).unwrap());
        run_migrations(&conn).unwrap();
        assert!(person_table_exists(&conn).unwrap());
    }

    #[test]
    fn display_name_is_not_a_column() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('person') WHERE name = 'person_name'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 0);
    }
}
