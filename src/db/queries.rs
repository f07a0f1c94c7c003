use crate::errors::{AppError, AppResult};
use crate::models::entry::{SequencedLocation, TimeEntry};
use crate::models::location::Location;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

/// Translate a SQLite constraint failure into the application's
/// `Constraint` variant; everything else stays a plain database error.
pub fn map_sql_err(e: rusqlite::Error) -> AppError {
    if let rusqlite::Error::SqliteFailure(f, ref msg) = e
        && f.code == rusqlite::ErrorCode::ConstraintViolation
    {
        return AppError::Constraint(msg.clone().unwrap_or_else(|| f.to_string()));
    }
    AppError::Db(e)
}

fn parse_stored_time(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.to_string())),
        )
    })
}

pub fn map_location_row(row: &Row) -> Result<Location> {
    Ok(Location {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("entry_date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Constraint(format!("bad entry_date: {date_str}"))),
        )
    })?;

    let start_time = parse_stored_time(&row.get::<_, String>("start_time")?)?;
    let end_time = parse_stored_time(&row.get::<_, String>("end_time")?)?;

    let break_start = match row.get::<_, Option<String>>("break_start")? {
        Some(s) => Some(parse_stored_time(&s)?),
        None => None,
    };
    let break_end = match row.get::<_, Option<String>>("break_end")? {
        Some(s) => Some(parse_stored_time(&s)?),
        None => None,
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        entry_date: date,
        start_time,
        end_time,
        break_start,
        break_end,
        updated_at: row.get("updated_at")?,
        locations: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// locations
// ---------------------------------------------------------------------------

pub fn insert_location(
    conn: &Connection,
    user_id: i64,
    name: &str,
    address: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO locations (user_id, name, address)
         VALUES (?1, ?2, ?3)",
        params![user_id, name, address],
    )
    .map_err(map_sql_err)?;
    Ok(conn.last_insert_rowid())
}

/// Case-insensitive lookup among the user's active locations.
pub fn find_active_location_by_name(
    conn: &Connection,
    user_id: i64,
    name: &str,
) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM locations
         WHERE user_id = ?1 AND active = 1 AND LOWER(name) = LOWER(?2)",
    )?;
    let id = stmt.query_row(params![user_id, name], |row| row.get(0)).optional()?;
    Ok(id)
}

pub fn active_location_count(conn: &Connection, user_id: i64) -> AppResult<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM locations WHERE user_id = ?1 AND active = 1",
        [user_id],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

/// How many of `ids` are active locations of this user.
/// `IN (...)` collapses duplicates, so a list with repeats never matches
/// its own length.
pub fn count_active_locations_in(
    conn: &Connection,
    user_id: i64,
    ids: &[i64],
) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!(
        "SELECT COUNT(*) FROM locations
         WHERE user_id = ? AND active = 1 AND id IN ({})",
        placeholders
    );

    let mut sql_params: Vec<&dyn ToSql> = vec![&user_id];
    sql_params.extend(ids.iter().map(|id| id as &dyn ToSql));

    let count: i64 = conn.query_row(&sql, rusqlite::params_from_iter(sql_params), |row| {
        row.get(0)
    })?;
    Ok(count as usize)
}

/// The user's active locations, alphabetically, for the picker.
pub fn load_user_locations(conn: &Connection, user_id: i64) -> AppResult<Vec<Location>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, address, active FROM locations
         WHERE user_id = ?1 AND active = 1
         ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([user_id], map_location_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// daily entries + sequence
// ---------------------------------------------------------------------------

/// Insert or overwrite the entry for (user, today). Today is the store's
/// `DATE('now')`, not a client-supplied date. Returns the row id.
pub fn upsert_today_entry(
    conn: &Connection,
    user_id: i64,
    start: NaiveTime,
    end: NaiveTime,
    break_start: Option<NaiveTime>,
    break_end: Option<NaiveTime>,
) -> AppResult<i64> {
    let fmt = |t: NaiveTime| t.format("%H:%M").to_string();

    let id = conn
        .query_row(
            "INSERT INTO daily_entries
                 (user_id, entry_date, start_time, end_time, break_start, break_end, updated_at)
             VALUES (?1, DATE('now'), ?2, ?3, ?4, ?5, CURRENT_TIMESTAMP)
             ON CONFLICT(user_id, entry_date)
             DO UPDATE SET
                 start_time = excluded.start_time,
                 end_time = excluded.end_time,
                 break_start = excluded.break_start,
                 break_end = excluded.break_end,
                 updated_at = CURRENT_TIMESTAMP
             RETURNING id",
            params![
                user_id,
                fmt(start),
                fmt(end),
                break_start.map(fmt),
                break_end.map(fmt),
            ],
            |row| row.get(0),
        )
        .map_err(map_sql_err)?;
    Ok(id)
}

/// Replace the whole sequence for an entry: delete, then reinsert with
/// dense 1-based positions in input order. The unique indexes reject any
/// position or location collision, failing the surrounding transaction.
pub fn replace_sequence(conn: &Connection, entry_id: i64, location_ids: &[i64]) -> AppResult<()> {
    conn.execute(
        "DELETE FROM daily_locations WHERE entry_id = ?1",
        [entry_id],
    )?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO daily_locations (entry_id, location_id, sequence_order)
         VALUES (?1, ?2, ?3)",
    )?;

    for (idx, loc_id) in location_ids.iter().enumerate() {
        stmt.execute(params![entry_id, loc_id, (idx as i64) + 1])
            .map_err(map_sql_err)?;
    }

    Ok(())
}

fn load_sequence(conn: &Connection, entry_id: i64) -> AppResult<Vec<SequencedLocation>> {
    let mut stmt = conn.prepare(
        "SELECT l.id, l.user_id, l.name, l.address, l.active, dl.sequence_order
         FROM daily_locations dl
         JOIN locations l ON dl.location_id = l.id
         WHERE dl.entry_id = ?1
         ORDER BY dl.sequence_order ASC",
    )?;

    let rows = stmt.query_map([entry_id], |row| {
        Ok(SequencedLocation {
            position: row.get("sequence_order")?,
            location: map_location_row(row)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Today's entry for the user joined with its ordered sequence, if any.
pub fn load_todays_entry(conn: &Connection, user_id: i64) -> AppResult<Option<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, entry_date, start_time, end_time,
                break_start, break_end, updated_at
         FROM daily_entries
         WHERE user_id = ?1 AND entry_date = DATE('now')",
    )?;

    let entry = stmt.query_row([user_id], map_entry_row).optional()?;

    let Some(mut entry) = entry else {
        return Ok(None);
    };

    entry.locations = load_sequence(conn, entry.id)?;
    Ok(Some(entry))
}
