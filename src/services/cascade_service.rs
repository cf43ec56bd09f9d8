//! Coordinador de borrados en cascada
//!
//! Único componente autorizado a borrar entregas como efecto secundario de
//! borrar otra entidad. Cada operación elimina primero las filas hijas y
//! después la fila padre dentro de una sola transacción: o todo se
//! confirma, o nada. Una transacción no confirmada se revierte al
//! soltarse, también en los caminos de error.

use sqlx::PgPool;

use crate::utils::errors::{store_error, AppError, AppResult};

pub struct CascadeService {
    pool: PgPool,
}

impl CascadeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Borrar un cliente y todas las entregas que lo referencian.
    ///
    /// El borrado de entregas es incondicional: cero filas afectadas es un
    /// resultado válido. Si el cliente no existe, nada queda borrado.
    pub async fn delete_client(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(store_error)?;

        sqlx::query("DELETE FROM deliveries WHERE client_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(store_error)?;
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }

        tx.commit().await.map_err(store_error)?;
        Ok(())
    }

    /// Borrar una ruta y todas sus entregas, en ese orden, atómicamente.
    pub async fn delete_route(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(store_error)?;

        sqlx::query("DELETE FROM deliveries WHERE route_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(store_error)?;
            return Err(AppError::NotFound(format!("Route {} not found", id)));
        }

        tx.commit().await.map_err(store_error)?;
        Ok(())
    }
}
