use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `storage` table exists.
fn storage_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='storage'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key-value `storage` table.
fn create_storage_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY NOT NULL,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to run on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !storage_table_exists(conn)? {
        create_storage_table(conn)?;
        conn.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', 'storage', 'Created storage table')",
            [chrono::Local::now().to_rfc3339()],
        )?;
    }

    Ok(())
}

/// Same as [`run_pending_migrations`], announcing what happened. Used by `init`.
pub fn run_pending_migrations_verbose(conn: &Connection) -> Result<()> {
    let fresh = !storage_table_exists(conn)?;
    run_pending_migrations(conn)?;
    if fresh {
        success("Created storage table.");
    }
    Ok(())
}
