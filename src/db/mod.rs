// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, get_database_path,
    resolve_database_path, ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};

use crate::error::AppResult;

/// Open a private in-memory database with the schema applied
pub fn open_memory_database() -> AppResult<ConnectionPool> {
    let pool = create_memory_pool()?;
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }
    Ok(pool)
}
