use chrono::{DateTime, Local};

/// Explicit per-request context handed into every repository operation.
/// The user id comes from the embedding application's session layer and is
/// trusted as-is; no ambient globals, no re-verification here.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: i64,
    pub request_time: DateTime<Local>,
}

impl RequestContext {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            request_time: Local::now(),
        }
    }
}
