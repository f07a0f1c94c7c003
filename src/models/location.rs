use serde::Serialize;

/// A work location owned by the user who created it.
/// Rows are never updated after creation; retirement flips `active` so that
/// historical entry sequences keep a valid reference.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub active: bool,
}

/// Most active locations a single user may hold.
pub const MAX_ACTIVE_LOCATIONS: usize = 100;

/// Sanitization caps applied on insert.
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_ADDRESS_LEN: usize = 100;
