#![allow(dead_code)]
use sitelog::core::repository;
use sitelog::db::initialize::init_db;
use sitelog::db::pool::DbPool;
use sitelog::models::context::RequestContext;

/// Fresh in-memory database with the full schema applied.
pub fn test_pool() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn ctx(user_id: i64) -> RequestContext {
    RequestContext::new(user_id)
}

/// Insert a location through the public API and return its id.
pub fn add_loc(pool: &mut DbPool, user_id: i64, name: &str) -> i64 {
    repository::add_location(pool, &ctx(user_id), name, None).expect("add location")
}
