use sqlx::PgPool;

use crate::dto::client_dto::{CreateClientRequest, UpdateClientRequest};
use crate::models::client::Client;
use crate::utils::codec;
use crate::utils::errors::{store_error, AppError, AppResult};

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, address, latitude, longitude, phone, email FROM clients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(clients)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, address, latitude, longitude, phone, email FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(client)
    }

    pub async fn create(&self, request: CreateClientRequest) -> AppResult<Client> {
        let latitude = codec::coord_to_decimal(request.latitude)?;
        let longitude = codec::coord_to_decimal(request.longitude)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, address, latitude, longitude, phone, email)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, address, latitude, longitude, phone, email
            "#,
        )
        .bind(request.name)
        .bind(request.address)
        .bind(latitude)
        .bind(longitude)
        .bind(request.phone)
        .bind(request.email)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(client)
    }

    /// Reemplazo total de los campos mutables
    pub async fn replace(&self, id: i64, request: UpdateClientRequest) -> AppResult<Client> {
        let latitude = codec::coord_to_decimal(request.latitude)?;
        let longitude = codec::coord_to_decimal(request.longitude)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, address = $3, latitude = $4, longitude = $5, phone = $6, email = $7
            WHERE id = $1
            RETURNING id, name, address, latitude, longitude, phone, email
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.address)
        .bind(latitude)
        .bind(longitude)
        .bind(request.phone)
        .bind(request.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        client.ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    // El borrado de clientes pasa por el coordinador de cascada, que
    // elimina antes las entregas que los referencian.
}
