//! Zone repository

use crate::domain::{Role, UpdateZoneInput, Zone, ZoneOwner, ZoneStatus, ZoneWithOwner};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn create(&self, latitude: f64, longitude: f64, user_id: i64) -> Result<Zone>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ZoneWithOwner>>;
    async fn list(&self) -> Result<Vec<ZoneWithOwner>>;
    /// Overwrite only the supplied fields; the rest keep their prior value
    async fn update(&self, id: i64, input: &UpdateZoneInput) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Flat row for the zone-owner join
#[derive(Debug, FromRow)]
struct ZoneOwnerRow {
    id: i64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    title: Option<String>,
    description: Option<String>,
    status: Option<ZoneStatus>,
    owner_id: i64,
    owner_name: String,
    owner_role: Role,
    owner_email: String,
}

impl From<ZoneOwnerRow> for ZoneWithOwner {
    fn from(row: ZoneOwnerRow) -> Self {
        ZoneWithOwner {
            id: row.id,
            latitude: row.latitude,
            longitude: row.longitude,
            title: row.title,
            description: row.description,
            status: row.status,
            user: ZoneOwner {
                id: row.owner_id,
                name: row.owner_name,
                role: row.owner_role,
                email: Some(row.owner_email),
            },
        }
    }
}

const ZONE_WITH_OWNER_SELECT: &str = r#"
    SELECT z.id, z.latitude, z.longitude, z.title, z.description, z.status,
           u.id AS owner_id, u.name AS owner_name, u.role AS owner_role, u.email AS owner_email
    FROM zones z
    INNER JOIN users u ON u.id = z.user_id
"#;

pub struct ZoneRepositoryImpl {
    pool: MySqlPool,
}

impl ZoneRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneRepository for ZoneRepositoryImpl {
    async fn create(&self, latitude: f64, longitude: f64, user_id: i64) -> Result<Zone> {
        let result = sqlx::query(
            r#"
            INSERT INTO zones (latitude, longitude, user_id, created_at)
            VALUES (?, ?, ?, NOW())
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        let zone = sqlx::query_as::<_, Zone>(
            r#"
            SELECT id, latitude, longitude, title, description, status, user_id, created_at
            FROM zones
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(zone)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ZoneWithOwner>> {
        let row = sqlx::query_as::<_, ZoneOwnerRow>(&format!(
            "{ZONE_WITH_OWNER_SELECT} WHERE z.id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ZoneWithOwner::from))
    }

    async fn list(&self) -> Result<Vec<ZoneWithOwner>> {
        let rows = sqlx::query_as::<_, ZoneOwnerRow>(&format!(
            "{ZONE_WITH_OWNER_SELECT} ORDER BY z.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ZoneWithOwner::from).collect())
    }

    async fn update(&self, id: i64, input: &UpdateZoneInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE zones
            SET title = COALESCE(?, title),
                description = COALESCE(?, description),
                status = COALESCE(?, status)
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM zones WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
