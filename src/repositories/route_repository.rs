use sqlx::PgPool;

use crate::dto::route_dto::{CreateRouteRequest, UpdateRouteRequest};
use crate::models::route::Route;
use crate::services::delivery_status::{self, STATUS_PLANEJADA};
use crate::utils::errors::{store_error, AppError, AppResult};

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, vehicle_id, driver_id, origin_depot_id, destination_depot_id,
                   route_date, departure_time, arrival_time, status
            FROM routes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Route>> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, vehicle_id, driver_id, origin_depot_id, destination_depot_id,
                   route_date, departure_time, arrival_time, status
            FROM routes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(route)
    }

    pub async fn create(&self, request: CreateRouteRequest) -> AppResult<Route> {
        let status = request
            .status
            .unwrap_or_else(|| STATUS_PLANEJADA.to_string());
        delivery_status::validate_label(&status)?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (vehicle_id, driver_id, origin_depot_id, destination_depot_id,
                                route_date, departure_time, arrival_time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, vehicle_id, driver_id, origin_depot_id, destination_depot_id,
                      route_date, departure_time, arrival_time, status
            "#,
        )
        .bind(request.vehicle_id)
        .bind(request.driver_id)
        .bind(request.origin_depot_id)
        .bind(request.destination_depot_id)
        .bind(request.route_date)
        .bind(request.departure_time)
        .bind(request.arrival_time)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(route)
    }

    /// Reemplazo total de los campos mutables
    pub async fn replace(&self, id: i64, request: UpdateRouteRequest) -> AppResult<Route> {
        delivery_status::validate_label(&request.status)?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET vehicle_id = $2, driver_id = $3, origin_depot_id = $4,
                destination_depot_id = $5, route_date = $6, departure_time = $7,
                arrival_time = $8, status = $9
            WHERE id = $1
            RETURNING id, vehicle_id, driver_id, origin_depot_id, destination_depot_id,
                      route_date, departure_time, arrival_time, status
            "#,
        )
        .bind(id)
        .bind(request.vehicle_id)
        .bind(request.driver_id)
        .bind(request.origin_depot_id)
        .bind(request.destination_depot_id)
        .bind(request.route_date)
        .bind(request.departure_time)
        .bind(request.arrival_time)
        .bind(request.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        route.ok_or_else(|| AppError::NotFound(format!("Route {} not found", id)))
    }

    // El borrado de rutas pasa por el coordinador de cascada, que elimina
    // antes las entregas de la ruta.
}
