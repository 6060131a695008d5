use sqlx::{QueryBuilder, Sqlite};

use super::store::{Store, push_in_list};
use crate::error::Result;
use crate::model::{NewUser, User};

impl Store {
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        tracing::debug!(user_id, "Fetching user");
        let user = sqlx::query_as::<_, User>(
            r#"SELECT "userId", "email", "name" FROM "user" WHERE "userId" = ?"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        tracing::debug!("Listing users");
        let users = sqlx::query_as::<_, User>(
            r#"SELECT "userId", "email", "name" FROM "user" ORDER BY "userId""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Inserts a user and returns the key the database assigned.
    pub async fn add_user(&self, user: &NewUser) -> Result<i64> {
        let user_id = sqlx::query(r#"INSERT INTO "user" ("email", "name") VALUES (?, ?)"#)
            .bind(&user.email)
            .bind(&user.name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        tracing::info!(user_id, email = %user.email, "Created user");
        Ok(user_id)
    }

    /// One `IN (...)` read for many keys. Unknown keys are simply absent.
    pub async fn users_by_ids(&self, user_ids: &[i64]) -> Result<Vec<User>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = user_ids.len(), "Batch fetching users");
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT "userId", "email", "name" FROM "user" WHERE "userId" IN "#,
        );
        push_in_list(&mut qb, user_ids);
        qb.push(r#" ORDER BY "userId""#);
        let users = qb.build_query_as::<User>().fetch_all(&self.pool).await?;
        Ok(users)
    }
}
