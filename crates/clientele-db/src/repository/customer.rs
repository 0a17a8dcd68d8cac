//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Key Operations
//! - Listing (all / active only)
//! - Lookup by id
//! - Save: upsert by phone, or update by id
//! - Remove, block and unblock by id
//!
//! ## Save Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         save(SaveCustomer)                              │
//! │                                                                         │
//! │  id == 0 ──► INSERT ... ON CONFLICT (phone) DO UPDATE SET name          │
//! │              │                                                          │
//! │              ├── new phone      → new row, fresh id                     │
//! │              └── existing phone → same row, name replaced               │
//! │                                                                         │
//! │  id != 0 ──► UPDATE ... SET name, phone WHERE id RETURNING              │
//! │              │                                                          │
//! │              ├── no row         → DbError::NotFound                     │
//! │              └── phone taken    → DbError::UniqueViolation              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation by id carries its own existence check through `RETURNING`:
//! an empty result is the not-found signal, and any other failure propagates
//! unchanged.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use clientele_core::{Customer, SaveCustomer};

const ENTITY: &str = "Customer";

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let everyone = repo.all().await?;
/// let ann = repo.by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, ordered by id.
    ///
    /// An empty table yields an empty vector, not an error.
    pub async fn all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Lists customers that are not blocked, ordered by id.
    pub async fn all_active(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            WHERE active = 1
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed active customers");
        Ok(customers)
    }

    /// Gets a customer by id.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Customer found
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn by_id(&self, id: i64) -> DbResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Saves a customer.
    ///
    /// With `id == 0` this upserts on `phone`: a new phone inserts a row, a
    /// known phone replaces that row's name. With any other id it updates
    /// name and phone of the existing row.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The persisted row
    /// * `Err(DbError::NotFound)` - Update by id matched no row
    /// * `Err(DbError::UniqueViolation)` - Update by id hit another customer's phone
    pub async fn save(&self, input: &SaveCustomer) -> DbResult<Customer> {
        if input.is_new() {
            return self.upsert_by_phone(input).await;
        }

        debug!(id = %input.id, "Updating customer");

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = ?2, phone = ?3
            WHERE id = ?1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(input.id)
        .bind(&input.name)
        .bind(&input.phone)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::not_found(ENTITY, input.id))
    }

    async fn upsert_by_phone(&self, input: &SaveCustomer) -> DbResult<Customer> {
        debug!(phone = %input.phone, "Upserting customer");

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, phone, active, created)
            VALUES (?1, ?2, 1, ?3)
            ON CONFLICT (phone) DO UPDATE SET name = excluded.name
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Deletes a customer and returns the row as it was before deletion.
    pub async fn remove_by_id(&self, id: i64) -> DbResult<Customer> {
        debug!(id = %id, "Removing customer");

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            DELETE FROM customers
            WHERE id = ?1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Blocks a customer (`active = false`) and returns the updated row.
    pub async fn block_by_id(&self, id: i64) -> DbResult<Customer> {
        self.set_active(id, false).await
    }

    /// Unblocks a customer (`active = true`) and returns the updated row.
    pub async fn unblock_by_id(&self, id: i64) -> DbResult<Customer> {
        self.set_active(id, true).await
    }

    async fn set_active(&self, id: i64, active: bool) -> DbResult<Customer> {
        debug!(id = %id, active = %active, "Setting customer status");

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET active = ?2
            WHERE id = ?1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id)
        .bind(active)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Counts all customers (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use clientele_core::NEW_CUSTOMER_ID;

    async fn repo() -> CustomerRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .customers()
    }

    fn new_customer(name: &str, phone: &str) -> SaveCustomer {
        SaveCustomer {
            id: NEW_CUSTOMER_ID,
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_lists_are_ok() {
        let repo = repo().await;

        assert!(repo.all().await.unwrap().is_empty());
        assert!(repo.all_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = repo().await;

        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();

        assert!(ann.id > 0);
        assert_eq!(ann.name, "Ann");
        assert_eq!(ann.phone, "555-0100");
        assert!(ann.active);
        assert_eq!(repo.count().await.unwrap(), 1);

        let fetched = repo.by_id(ann.id).await.unwrap();
        assert_eq!(fetched, ann);
    }

    #[tokio::test]
    async fn test_upsert_by_phone_updates_name() {
        let repo = repo().await;

        let first = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        let second = repo
            .save(&new_customer("Annie", "555-0100"))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Annie");
        assert_eq!(second.created, first.created);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();

        let updated = repo
            .save(&SaveCustomer {
                id: ann.id,
                name: "Ann B".to_string(),
                phone: "555-0199".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, ann.id);
        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.phone, "555-0199");
        assert_eq!(updated.created, ann.created);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = repo().await;

        let err = repo
            .save(&SaveCustomer {
                id: 999,
                name: "Ghost".to_string(),
                phone: "555-0000".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_with_taken_phone_is_internal() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        repo.save(&new_customer("Bob", "555-0101")).await.unwrap();

        let err = repo
            .save(&SaveCustomer {
                id: ann.id,
                name: "Ann".to_string(),
                phone: "555-0101".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert!(!err.is_not_found());

        // Nothing changed
        assert_eq!(repo.by_id(ann.id).await.unwrap().phone, "555-0100");
    }

    #[tokio::test]
    async fn test_by_id_missing() {
        let repo = repo().await;

        let err = repo.by_id(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remove_returns_snapshot() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();

        let removed = repo.remove_by_id(ann.id).await.unwrap();
        assert_eq!(removed, ann);

        assert!(repo.by_id(ann.id).await.unwrap_err().is_not_found());
        assert!(repo.remove_by_id(ann.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        repo.remove_by_id(ann.id).await.unwrap();

        let bob = repo.save(&new_customer("Bob", "555-0101")).await.unwrap();
        assert!(bob.id > ann.id);
    }

    #[tokio::test]
    async fn test_block_and_unblock() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        let bob = repo.save(&new_customer("Bob", "555-0101")).await.unwrap();

        let blocked = repo.block_by_id(ann.id).await.unwrap();
        assert_eq!(blocked.id, ann.id);
        assert!(blocked.is_blocked());

        let active: Vec<i64> = repo
            .all_active()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(active, vec![bob.id]);
        assert_eq!(repo.all().await.unwrap().len(), 2);

        let unblocked = repo.unblock_by_id(ann.id).await.unwrap();
        assert!(unblocked.active);

        let active: Vec<i64> = repo
            .all_active()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(active, vec![ann.id, bob.id]);
    }

    #[tokio::test]
    async fn test_block_missing_is_not_found() {
        let repo = repo().await;

        assert!(repo.block_by_id(5).await.unwrap_err().is_not_found());
        assert!(repo.unblock_by_id(5).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_upsert_keeps_blocked_status() {
        let repo = repo().await;
        let ann = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        repo.block_by_id(ann.id).await.unwrap();

        let again = repo.save(&new_customer("Ann", "555-0100")).await.unwrap();
        assert_eq!(again.id, ann.id);
        assert!(!again.active);
    }

    #[tokio::test]
    async fn test_closed_pool_is_internal_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();
        db.close().await;

        let err = repo.all().await.unwrap_err();
        assert!(!err.is_not_found());
    }
}
