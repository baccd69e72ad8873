pub mod connection;
pub mod listings;
pub mod reviews;

pub use connection::{init_db, Database};

pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
