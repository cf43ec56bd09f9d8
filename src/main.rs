use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use delivery_ops::config::environment::EnvironmentConfig;
use delivery_ops::database::DatabaseConnection;
use delivery_ops::middleware::cors::cors_layer;
use delivery_ops::routes;
use delivery_ops::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 Delivery Ops - API de operaciones de última milla");
    info!("===================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = routes::create_api_router()
        .layer(cors_layer(&config))
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Liveness");
    info!("👤 Client:");
    info!("   POST   /api/client - Crear cliente");
    info!("   GET    /api/client - Listar clientes");
    info!("   GET    /api/client/:id - Obtener cliente");
    info!("   PUT    /api/client/:id - Reemplazar cliente");
    info!("   DELETE /api/client/:id - Borrar cliente y sus entregas");
    info!("🏭 Depot:");
    info!("   POST   /api/depot - Crear depósito");
    info!("   GET    /api/depot - Listar depósitos");
    info!("   GET    /api/depot/:id - Obtener depósito");
    info!("   PUT    /api/depot/:id - Reemplazar depósito");
    info!("   DELETE /api/depot/:id - Borrar depósito");
    info!("🚗 Vehicle:");
    info!("   POST   /api/vehicle - Crear vehículo");
    info!("   GET    /api/vehicle - Listar vehículos");
    info!("   GET    /api/vehicle/:id - Obtener vehículo");
    info!("   PUT    /api/vehicle/:id - Reemplazar vehículo");
    info!("   DELETE /api/vehicle/:id - Borrar vehículo");
    info!("🧑 Driver:");
    info!("   POST   /api/driver - Crear conductor");
    info!("   GET    /api/driver - Listar conductores");
    info!("   GET    /api/driver/:id - Obtener conductor");
    info!("   PUT    /api/driver/:id - Reemplazar conductor");
    info!("   DELETE /api/driver/:id - Borrar conductor");
    info!("🗺️ Route:");
    info!("   POST   /api/route - Crear ruta");
    info!("   GET    /api/route - Listar rutas");
    info!("   GET    /api/route/:id - Obtener ruta");
    info!("   GET    /api/route/:id/deliveries - Ruta con entregas ordenadas");
    info!("   PUT    /api/route/:id - Reemplazar ruta");
    info!("   DELETE /api/route/:id - Borrar ruta y sus entregas");
    info!("📦 Delivery:");
    info!("   POST   /api/delivery - Crear entrega");
    info!("   GET    /api/delivery - Listar entregas");
    info!("   GET    /api/delivery/:id - Obtener entrega");
    info!("   PUT    /api/delivery/:id - Reemplazar entrega");
    info!("   PATCH  /api/delivery/:id/status - Actualizar estado");
    info!("   DELETE /api/delivery/:id - Borrar entrega");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
