use sqlx::PgPool;

use crate::dto::depot_dto::{CreateDepotRequest, UpdateDepotRequest};
use crate::models::depot::Depot;
use crate::utils::codec;
use crate::utils::errors::{delete_blocked, not_found_or_in_use, store_error, AppError, AppResult};

pub struct DepotRepository {
    pool: PgPool,
}

impl DepotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Depot>> {
        let depots = sqlx::query_as::<_, Depot>(
            "SELECT id, name, address, latitude, longitude FROM depots ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(depots)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Depot>> {
        let depot = sqlx::query_as::<_, Depot>(
            "SELECT id, name, address, latitude, longitude FROM depots WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(depot)
    }

    pub async fn create(&self, request: CreateDepotRequest) -> AppResult<Depot> {
        let latitude = codec::coord_to_decimal(request.latitude)?;
        let longitude = codec::coord_to_decimal(request.longitude)?;

        let depot = sqlx::query_as::<_, Depot>(
            r#"
            INSERT INTO depots (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude
            "#,
        )
        .bind(request.name)
        .bind(request.address)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(depot)
    }

    /// Reemplazo total de los campos mutables
    pub async fn replace(&self, id: i64, request: UpdateDepotRequest) -> AppResult<Depot> {
        let latitude = codec::coord_to_decimal(request.latitude)?;
        let longitude = codec::coord_to_decimal(request.longitude)?;

        let depot = sqlx::query_as::<_, Depot>(
            r#"
            UPDATE depots
            SET name = $2, address = $3, latitude = $4, longitude = $5
            WHERE id = $1
            RETURNING id, name, address, latitude, longitude
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.address)
        .bind(latitude)
        .bind(longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        depot.ok_or_else(|| AppError::NotFound(format!("Depot {} not found", id)))
    }

    /// Borrado directo. Un depósito referenciado por un vehículo o una
    /// ruta responde igual que uno inexistente.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM depots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_blocked(e, "Depot", id))?;

        if result.rows_affected() == 0 {
            return Err(not_found_or_in_use("Depot", id));
        }

        Ok(())
    }
}
