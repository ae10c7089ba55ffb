//! Complaint operations.
//!
//! Complaints are written once and read many times. There is no update or
//! delete path.

use chrono::Local;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{Complaint, ComplaintReceipt, NewComplaint};

/// Length of a generated complaint id.
pub const COMPLAINT_ID_LEN: usize = 8;

/// Confirmation message returned on create.
pub const CREATED_MESSAGE: &str = "Complaint created successfully";

/// Generate a short uppercase complaint id from a random UUID.
pub fn generate_complaint_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(COMPLAINT_ID_LEN);
    id.to_uppercase()
}

/// Current local time in ISO-8601 with microseconds.
fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Create a new complaint.
///
/// All text fields are trimmed before they are stored. A duplicate id is
/// reported as [`DatabaseError::AlreadyExists`] and not retried.
pub async fn create_complaint(pool: &SqlitePool, input: &NewComplaint) -> Result<ComplaintReceipt> {
    insert_complaint(pool, generate_complaint_id(), input).await
}

async fn insert_complaint(
    pool: &SqlitePool,
    complaint_id: String,
    input: &NewComplaint,
) -> Result<ComplaintReceipt> {
    let created_at = now_timestamp();
    let input = input.trimmed();

    sqlx::query(
        r#"
        INSERT INTO complaints (complaint_id, name, phone_number, email, complaint_details, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&complaint_id)
    .bind(&input.name)
    .bind(&input.phone_number)
    .bind(&input.email)
    .bind(&input.complaint_details)
    .bind(&created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Complaint",
                    id: complaint_id.clone(),
                };
            }
        }
        tracing::error!("Database insert error: {}", e);
        DatabaseError::Sqlx(e)
    })?;

    tracing::info!(complaint_id = %complaint_id, "Complaint created");

    Ok(ComplaintReceipt {
        complaint_id,
        message: CREATED_MESSAGE.to_string(),
    })
}

/// Get a complaint by id.
///
/// Returns `Ok(None)` when no complaint has that exact id.
pub async fn get_complaint(pool: &SqlitePool, complaint_id: &str) -> Result<Option<Complaint>> {
    let complaint = sqlx::query_as::<_, Complaint>(
        r#"
        SELECT complaint_id, name, phone_number, email, complaint_details, created_at
        FROM complaints
        WHERE complaint_id = ?
        "#,
    )
    .bind(complaint_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Database read error: {}", e);
        DatabaseError::Sqlx(e)
    })?;

    Ok(complaint)
}

/// Count stored complaints.
pub async fn count_complaints(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM complaints
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_pool() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn sample() -> NewComplaint {
        NewComplaint::new("Deepak", "9876543210", "deepak@example.com", "My order was delayed")
    }

    #[test]
    fn test_generate_complaint_id_shape() {
        let id = generate_complaint_id();
        assert_eq!(id.len(), COMPLAINT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_complaint_id(), generate_complaint_id());
    }

    #[test]
    fn test_timestamp_format() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2024-01-01T12:00:00.000000".len());
        assert_eq!(&ts[10..11], "T");
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let db = test_pool().await;
        let input = NewComplaint::new("  Deepak ", " 9876543210 ", " deepak@example.com\n", "\tlate order  ");

        let receipt = create_complaint(db.pool(), &input).await.unwrap();
        let stored = get_complaint(db.pool(), &receipt.complaint_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.complaint_id, receipt.complaint_id);
        assert_eq!(stored, Complaint {
            complaint_id: receipt.complaint_id.clone(),
            name: "Deepak".to_string(),
            phone_number: "9876543210".to_string(),
            email: "deepak@example.com".to_string(),
            complaint_details: "late order".to_string(),
            created_at: stored.created_at.clone(),
        });
        assert!(!stored.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_sequential_creates_get_distinct_ids() {
        let db = test_pool().await;

        let first = create_complaint(db.pool(), &sample()).await.unwrap();
        let second = create_complaint(db.pool(), &sample()).await.unwrap();

        assert_ne!(first.complaint_id, second.complaint_id);
        assert_eq!(count_complaints(db.pool()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let db = test_pool().await;
        create_complaint(db.pool(), &sample()).await.unwrap();

        let missing = get_complaint(db.pool(), "NOEXIST1").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_is_exact_match() {
        let db = test_pool().await;
        let receipt = create_complaint(db.pool(), &sample()).await.unwrap();

        let lower = receipt.complaint_id.to_lowercase();
        if lower != receipt.complaint_id {
            assert!(get_complaint(db.pool(), &lower).await.unwrap().is_none());
        }
        let prefix = &receipt.complaint_id[..4];
        assert!(get_complaint(db.pool(), prefix).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_surfaced() {
        let db = test_pool().await;
        let receipt = create_complaint(db.pool(), &sample()).await.unwrap();

        let result = insert_complaint(db.pool(), receipt.complaint_id.clone(), &sample()).await;

        match result {
            Err(DatabaseError::AlreadyExists { entity, id }) => {
                assert_eq!(entity, "Complaint");
                assert_eq!(id, receipt.complaint_id);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
        assert_eq!(count_complaints(db.pool()).await.unwrap(), 1);
    }
}
