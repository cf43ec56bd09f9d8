use sqlx::PgPool;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::services::delivery_status::{self, STATUS_DISPONIVEL};
use crate::utils::errors::{
    delete_blocked, is_unique_violation, not_found_or_in_use, store_error, AppError, AppResult,
};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, year, status, depot_id FROM vehicles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, year, status, depot_id FROM vehicles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(vehicle)
    }

    pub async fn plate_exists(&self, plate: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(result.0)
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let status = request
            .status
            .unwrap_or_else(|| STATUS_DISPONIVEL.to_string());
        delivery_status::validate_label(&status)?;

        if self.plate_exists(&request.plate).await? {
            return Err(AppError::Conflict(format!(
                "Plate {} is already registered",
                request.plate
            )));
        }

        let plate = request.plate.clone();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (plate, model, year, status, depot_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, plate, model, year, status, depot_id
            "#,
        )
        .bind(request.plate)
        .bind(request.model)
        .bind(request.year)
        .bind(status)
        .bind(request.depot_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Carrera perdida contra otra inserción con la misma matrícula
            if is_unique_violation(&e) {
                AppError::Conflict(format!("Plate {} is already registered", plate))
            } else {
                store_error(e)
            }
        })?;

        Ok(vehicle)
    }

    /// Reemplazo total de los campos mutables
    pub async fn replace(&self, id: i64, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        delivery_status::validate_label(&request.status)?;

        let plate = request.plate.clone();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = $2, model = $3, year = $4, status = $5, depot_id = $6
            WHERE id = $1
            RETURNING id, plate, model, year, status, depot_id
            "#,
        )
        .bind(id)
        .bind(request.plate)
        .bind(request.model)
        .bind(request.year)
        .bind(request.status)
        .bind(request.depot_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("Plate {} is already registered", plate))
            } else {
                store_error(e)
            }
        })?;

        vehicle.ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Borrado directo. Un vehículo referenciado por una ruta responde
    /// igual que uno inexistente.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_blocked(e, "Vehicle", id))?;

        if result.rows_affected() == 0 {
            return Err(not_found_or_in_use("Vehicle", id));
        }

        Ok(())
    }
}
