use crate::error::{Result, StoreError};
use rusqlite::Connection;

// Applied in order; the schema version is the count already applied.
const MIGRATIONS: &[&str] = &[include_str!("../migrations/001_init.sql")];

pub fn latest_version() -> i64 {
    MIGRATIONS.len() as i64
}

pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;
    let latest = latest_version();
    if current > latest {
        return Err(StoreError::Migration(format!(
            "db version {current} newer than available migrations {latest}"
        )));
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    for (version, sql) in (1_i64..).zip(MIGRATIONS).skip(current as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i64> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}
