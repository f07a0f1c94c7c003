//! Transactional persistence operations for locations and daily entries.
//! Validation runs before any mutation; every multi-statement write is one
//! transaction that either fully commits or fully rolls back.

use crate::core::timemath;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::context::RequestContext;
use crate::models::entry::TimeEntry;
use crate::models::location::{Location, MAX_ACTIVE_LOCATIONS, MAX_ADDRESS_LEN, MAX_NAME_LEN};
use crate::utils::sanitize::sanitize_input;
use crate::utils::time::{parse_optional_time, parse_required_time};

/// Add a new location for the user.
///
/// Name and address go through the allow-list sanitizer first. The
/// duplicate check, the active-count cap and the insert run in one
/// transaction so a racing insert cannot slip between check and write.
pub fn add_location(
    pool: &mut DbPool,
    ctx: &RequestContext,
    name: &str,
    address: Option<&str>,
) -> AppResult<i64> {
    let name = sanitize_input(name, MAX_NAME_LEN);
    if name.is_empty() {
        return Err(AppError::EmptyLocationName);
    }

    let address = address
        .map(|a| sanitize_input(a, MAX_ADDRESS_LEN))
        .filter(|a| !a.is_empty());

    let tx = pool.conn.transaction()?;

    if queries::find_active_location_by_name(&tx, ctx.user_id, &name)?.is_some() {
        return Err(AppError::DuplicateLocation(name));
    }

    if queries::active_location_count(&tx, ctx.user_id)? >= MAX_ACTIVE_LOCATIONS {
        return Err(AppError::LocationLimitReached(MAX_ACTIVE_LOCATIONS));
    }

    let id = queries::insert_location(&tx, ctx.user_id, &name, address.as_deref())?;
    audit(
        &tx,
        ctx,
        "add_location",
        &id.to_string(),
        &format!("Location '{}' added", name),
    )?;

    tx.commit().map_err(queries::map_sql_err)?;
    Ok(id)
}

/// The user's active locations for the presentation layer's picker.
pub fn user_locations(pool: &DbPool, ctx: &RequestContext) -> AppResult<Vec<Location>> {
    queries::load_user_locations(&pool.conn, ctx.user_id)
}

/// Today's entry with its ordered location sequence, or None if the user
/// has not saved one yet. "Today" is the store's current date.
pub fn get_todays_entry(pool: &DbPool, ctx: &RequestContext) -> AppResult<Option<TimeEntry>> {
    queries::load_todays_entry(&pool.conn, ctx.user_id)
}

/// Save or overwrite today's entry together with its location sequence.
///
/// Order of checks: time parsing, time ordering, non-empty id list, every
/// id active and owned by the user. Only then the transaction runs: upsert
/// the entry row, delete the old sequence, reinsert with 1-based positions.
/// A constraint hit anywhere (duplicate ids in the input included) rolls
/// the whole thing back; no partial entry is ever observable.
pub fn save_entry(
    pool: &mut DbPool,
    ctx: &RequestContext,
    start_time: &str,
    end_time: &str,
    break_start: Option<&str>,
    break_end: Option<&str>,
    location_ids: &[i64],
) -> AppResult<i64> {
    let start = parse_required_time(start_time)?;
    let end = parse_required_time(end_time)?;
    let bs = parse_optional_time(break_start)?;
    let be = parse_optional_time(break_end)?;

    timemath::validate_times(start, bs, be, end)?;

    if location_ids.is_empty() {
        return Err(AppError::EmptyLocations);
    }

    let active = queries::count_active_locations_in(&pool.conn, ctx.user_id, location_ids)?;
    if active != location_ids.len() {
        return Err(AppError::InvalidLocations {
            selected: location_ids.len(),
            active,
        });
    }

    let tx = pool.conn.transaction()?;

    let entry_id = queries::upsert_today_entry(&tx, ctx.user_id, start, end, bs, be)?;
    queries::replace_sequence(&tx, entry_id, location_ids)?;
    audit(
        &tx,
        ctx,
        "save_entry",
        &entry_id.to_string(),
        &format!("Entry saved with {} locations", location_ids.len()),
    )?;

    tx.commit().map_err(queries::map_sql_err)?;
    Ok(entry_id)
}
