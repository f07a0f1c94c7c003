use crate::errors::AppResult;
use crate::models::context::RequestContext;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
/// Called inside the repository transactions so the audit row commits or
/// rolls back together with the operation it describes.
pub fn audit(
    conn: &Connection,
    ctx: &RequestContext,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        ctx.request_time.to_rfc3339(),
        operation,
        target,
        format!("user {}: {}", ctx.user_id, message),
    ])?;

    Ok(())
}
