use sqlx::sqlite::SqlitePool;
use crate::models::*;

const SCHEMA: &str = include_str!("../../schema.sql");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Handle to the team database, cloned into every request.
#[derive(Debug, Clone)]
pub struct TeamStore {
    pool: SqlitePool,
}

impl TeamStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `team` and `user` tables if they are not there yet.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Team queries
    pub async fn get_team(&self, team_id: i64) -> Result<Team, StoreError> {
        sqlx::query_as::<_, Team>(
            r#"SELECT id, name, city, league, division FROM team WHERE id = ?"#
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// The primary key decides conflicts, so two concurrent inserts of the
    /// same id cannot both succeed.
    pub async fn insert_team(&self, team: &Team) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO team (id, name, city, league, division)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT(id) DO NOTHING"#
        )
        .bind(team.id)
        .bind(&team.name)
        .bind(&team.city)
        .bind(&team.league)
        .bind(&team.division)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict);
        }

        Ok(())
    }

    pub async fn update_team(&self, team_id: i64, changes: &TeamChanges) -> Result<Team, StoreError> {
        sqlx::query_as::<_, Team>(
            r#"UPDATE team
               SET name = COALESCE(?, name),
                   city = COALESCE(?, city),
                   league = COALESCE(?, league),
                   division = COALESCE(?, division)
               WHERE id = ?
               RETURNING id, name, city, league, division"#
        )
        .bind(changes.name.as_deref())
        .bind(changes.city.as_deref())
        .bind(changes.league.as_deref())
        .bind(changes.division.as_deref())
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn delete_team(&self, team_id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(r#"DELETE FROM team WHERE id = ?"#)
            .bind(team_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    // User queries
    pub async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, password FROM "user" WHERE name = ?"#
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
