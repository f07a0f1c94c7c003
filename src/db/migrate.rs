//! Schema creation and upgrades.
//! All DDL lives here; callers go through `initialize::init_db`.

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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name = ?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the core tables with the modern schema.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id  INTEGER NOT NULL,
            name     TEXT NOT NULL,
            address  TEXT,
            active   INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_locations_user_active
            ON locations(user_id, active);

        CREATE TABLE IF NOT EXISTS daily_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL,
            entry_date  TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            break_start TEXT,
            break_end   TEXT,
            updated_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(user_id, entry_date)
        );

        CREATE TABLE IF NOT EXISTS daily_locations (
            entry_id       INTEGER NOT NULL REFERENCES daily_entries(id) ON DELETE CASCADE,
            location_id    INTEGER NOT NULL REFERENCES locations(id),
            sequence_order INTEGER NOT NULL,
            UNIQUE(entry_id, sequence_order)
        );
        "#,
    )?;
    Ok(())
}

/// One location may appear only once per entry. Databases created before
/// this index existed get it added here.
fn ensure_location_unique_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_locations_entry_location
            ON daily_locations(entry_id, location_id);
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Idempotent; safe to run on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create core tables if missing
    if !table_exists(conn, "daily_entries")? {
        create_core_tables(conn)?;
    }

    // 3) Upgrades for existing databases
    ensure_location_unique_index(conn)?;

    Ok(())
}
