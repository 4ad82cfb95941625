use crate::error::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

// A single process owns the file for the whole session, so the default
// rollback journal is kept and nothing waits on locks.
const PRAGMAS: &[(&str, &str)] = &[("foreign_keys", "ON"), ("synchronous", "FULL")];

pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    lock_down_file(path)?;
    configure(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    for (name, value) in PRAGMAS {
        conn.pragma_update(None, name, value)?;
    }
    Ok(())
}

#[cfg(unix)]
fn lock_down_file(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn lock_down_file(_path: &Path) -> Result<()> {
    Ok(())
}
