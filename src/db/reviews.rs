// src/db/reviews.rs
use crate::domain::{ObjectId, Review};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn insert_review(
    conn: &Connection,
    comment: &str,
    rating: u8,
    now: i64,
) -> Result<Review, ServerError> {
    if !(1..=5).contains(&rating) {
        return Err(ServerError::Validation(
            "\"rating\" must be between 1 and 5".into(),
        ));
    }

    let review = Review {
        id: ObjectId::new(),
        comment: comment.to_string(),
        rating,
        created_at: now,
    };

    conn.execute(
        "insert into reviews (id, comment, rating, created_at) values (?1, ?2, ?3, ?4)",
        params![review.id, review.comment, review.rating, review.created_at],
    )?;

    Ok(review)
}

pub fn find_review_by_id(conn: &Connection, id: &ObjectId) -> Result<Option<Review>, ServerError> {
    let review = conn
        .query_row(
            "select id, comment, rating, created_at from reviews where id = ?1",
            params![id],
            |row| {
                Ok(Review {
                    id: row.get(0)?,
                    comment: row.get(1)?,
                    rating: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(review)
}

/// Deletes the given reviews in one transaction. Returns rows removed.
pub fn delete_reviews(conn: &mut Connection, ids: &[ObjectId]) -> Result<usize, ServerError> {
    let tx = conn.transaction()?;
    let mut removed = 0;
    {
        let mut stmt = tx.prepare("delete from reviews where id = ?1")?;
        for id in ids {
            removed += stmt.execute(params![id])?;
        }
    }
    tx.commit()?;
    Ok(removed)
}

/// Records reviews that must still be deleted for an already-removed listing.
pub fn queue_review_cleanup(
    conn: &mut Connection,
    listing_id: &ObjectId,
    review_ids: &[ObjectId],
    error: &str,
    now: i64,
) -> Result<(), ServerError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            r#"
            insert into review_cleanup_queue (review_id, listing_id, queued_at, last_error)
            values (?1, ?2, ?3, ?4)
            on conflict(review_id) do update set last_error = excluded.last_error
            "#,
        )?;
        for review_id in review_ids {
            stmt.execute(params![review_id, listing_id, now, error])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn pending_review_cleanups(conn: &Connection) -> Result<Vec<ObjectId>, ServerError> {
    let mut stmt =
        conn.prepare("select review_id from review_cleanup_queue order by queued_at, review_id")?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<ObjectId>, _>>()?;
    Ok(ids)
}

fn clear_queued_review(conn: &mut Connection, review_id: &ObjectId) -> Result<(), ServerError> {
    let tx = conn.transaction()?;
    tx.execute("delete from reviews where id = ?1", params![review_id])?;
    tx.execute(
        "delete from review_cleanup_queue where review_id = ?1",
        params![review_id],
    )?;
    tx.commit()?;
    Ok(())
}

/// Retries every queued review deletion. Entries that fail again stay
/// queued with the new error. Returns how many were cleared.
pub fn sweep_review_cleanups(conn: &mut Connection) -> Result<usize, ServerError> {
    let pending = pending_review_cleanups(conn)?;
    let mut cleared = 0;

    for review_id in &pending {
        match clear_queued_review(conn, review_id) {
            Ok(()) => cleared += 1,
            Err(err) => {
                tracing::warn!(review_id = %review_id, error = %err, "review cleanup retry failed");
                let note = conn.execute(
                    "update review_cleanup_queue set last_error = ?1 where review_id = ?2",
                    params![err.to_string(), review_id],
                );
                if let Err(e) = note {
                    tracing::error!(review_id = %review_id, error = %e, "could not record cleanup failure");
                }
            }
        }
    }

    if !pending.is_empty() {
        tracing::info!(cleared, pending = pending.len(), "review cleanup sweep finished");
    }
    Ok(cleared)
}
