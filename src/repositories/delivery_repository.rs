use sqlx::PgPool;

use crate::dto::delivery_dto::{
    CreateDeliveryRequest, UpdateDeliveryRequest, UpdateDeliveryStatusRequest,
};
use crate::models::delivery::Delivery;
use crate::services::delivery_status::{self, STATUS_PENDENTE};
use crate::utils::errors::{is_unique_violation, store_error, AppError, AppResult};

pub struct DeliveryRepository {
    pool: PgPool,
}

impl DeliveryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            r#"
            SELECT id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            FROM deliveries
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(deliveries)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Delivery>> {
        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            SELECT id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            FROM deliveries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(delivery)
    }

    /// Entregas de una ruta, en orden de secuencia ascendente
    pub async fn find_by_route(&self, route_id: i64) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            r#"
            SELECT id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            FROM deliveries
            WHERE route_id = $1
            ORDER BY sequence ASC
            "#,
        )
        .bind(route_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(deliveries)
    }

    pub async fn create(&self, request: CreateDeliveryRequest) -> AppResult<Delivery> {
        let status = request
            .status
            .unwrap_or_else(|| STATUS_PENDENTE.to_string());
        delivery_status::validate_label(&status)?;
        // Una entrega creada directamente como "Entregue" queda estampada
        let stamp = delivery_status::delivered_stamp(&status);

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            INSERT INTO deliveries (route_id, client_id, sequence, status, scheduled_at,
                                    delivered_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            "#,
        )
        .bind(request.route_id)
        .bind(request.client_id)
        .bind(request.sequence)
        .bind(status)
        .bind(request.scheduled_at)
        .bind(stamp)
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| sequence_conflict(e, request.route_id, request.sequence))?;

        Ok(delivery)
    }

    /// Reemplazo total de los campos mutables. `delivered_at` no forma
    /// parte del reemplazo: solo lo estampa un estado entrante "Entregue".
    pub async fn replace(&self, id: i64, request: UpdateDeliveryRequest) -> AppResult<Delivery> {
        delivery_status::validate_label(&request.status)?;
        let stamp = delivery_status::delivered_stamp(&request.status);

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            UPDATE deliveries
            SET route_id = $2, client_id = $3, sequence = $4, status = $5,
                scheduled_at = $6, notes = $7,
                delivered_at = COALESCE($8, delivered_at)
            WHERE id = $1
            RETURNING id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            "#,
        )
        .bind(id)
        .bind(request.route_id)
        .bind(request.client_id)
        .bind(request.sequence)
        .bind(request.status)
        .bind(request.scheduled_at)
        .bind(request.notes)
        .bind(stamp)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sequence_conflict(e, request.route_id, request.sequence))?;

        delivery.ok_or_else(|| AppError::NotFound(format!("Delivery {} not found", id)))
    }

    /// Actualización parcial de estado: la única operación parcial del
    /// sistema. El sello se evalúa solo sobre el valor entrante, de modo
    /// que repetir "Entregue" re-estampa y cualquier otro estado conserva
    /// el sello existente.
    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateDeliveryStatusRequest,
    ) -> AppResult<Delivery> {
        delivery_status::validate_label(&request.status)?;
        let stamp = delivery_status::delivered_stamp(&request.status);

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            UPDATE deliveries
            SET status = $2,
                sequence = COALESCE($3, sequence),
                notes = COALESCE($4, notes),
                delivered_at = COALESCE($5, delivered_at)
            WHERE id = $1
            RETURNING id, route_id, client_id, sequence, status, scheduled_at, delivered_at, notes
            "#,
        )
        .bind(id)
        .bind(request.status)
        .bind(request.sequence)
        .bind(request.notes)
        .bind(stamp)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        delivery.ok_or_else(|| AppError::NotFound(format!("Delivery {} not found", id)))
    }

    /// Borrado directo de una sola fila. Los borrados como efecto de
    /// eliminar un cliente o una ruta pasan por el coordinador de cascada.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM deliveries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Delivery {} not found", id)));
        }

        Ok(())
    }
}

/// `sequence` es único dentro de una ruta; la violación se reporta como
/// conflicto en lugar de error de base de datos.
fn sequence_conflict(e: sqlx::Error, route_id: i64, sequence: i32) -> AppError {
    if is_unique_violation(&e) {
        AppError::Conflict(format!(
            "Sequence {} is already in use for route {}",
            sequence, route_id
        ))
    } else {
        store_error(e)
    }
}
