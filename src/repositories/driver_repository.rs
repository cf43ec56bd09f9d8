use sqlx::PgPool;

use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::models::driver::Driver;
use crate::utils::errors::{delete_blocked, not_found_or_in_use, store_error, AppError, AppResult};

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(
            "SELECT id, name, national_id, license_number, phone FROM drivers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>(
            "SELECT id, name, national_id, license_number, phone FROM drivers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(driver)
    }

    pub async fn create(&self, request: CreateDriverRequest) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (name, national_id, license_number, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, national_id, license_number, phone
            "#,
        )
        .bind(request.name)
        .bind(request.national_id)
        .bind(request.license_number)
        .bind(request.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(driver)
    }

    /// Reemplazo total de los campos mutables
    pub async fn replace(&self, id: i64, request: UpdateDriverRequest) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = $2, national_id = $3, license_number = $4, phone = $5
            WHERE id = $1
            RETURNING id, name, national_id, license_number, phone
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.national_id)
        .bind(request.license_number)
        .bind(request.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        driver.ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Borrado directo. Un conductor referenciado por una ruta responde
    /// igual que uno inexistente.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_blocked(e, "Driver", id))?;

        if result.rows_affected() == 0 {
            return Err(not_found_or_in_use("Driver", id));
        }

        Ok(())
    }
}
