#![allow(
    clippy::useless_format,
    clippy::unnecessary_map_or,
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::unnecessary_lazy_evaluations
)]

pub mod domain;
pub mod handlers;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Creamos el directorio de logs
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Silenciamos los logs de SQL, dejamos los de la aplicación
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Middleware simple de logging de requests
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Utc;

        use shared::format::format_number;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        // Leemos el cuerpo para conocer el tamaño real de la respuesta
        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                let duration = start.elapsed();
                let timestamp = Utc::now() - chrono::Duration::hours(5);
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    timestamp.format("%H:%M:%S"),
                    duration.as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        let size = bytes.len();
        let duration = start.elapsed();
        // Hora local de Perú (UTC-5)
        let timestamp = Utc::now() - chrono::Duration::hours(5);

        // Cian para 200, amarillo para el resto
        let color_code = if parts.status.as_u16() == 200 {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            timestamp.format("%H:%M:%S"),
            duration.as_millis(),
            format!("{}", format_number(size)),
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    // Cargar configuración y dejarla disponible para los handlers
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::config::init_config(config);

    // Inicializar la base de datos (crea tablas y siembra ubigeo)
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATÁLOGO
        // ========================================
        .route(
            "/api/marca",
            get(handlers::a001_marca::list_all).post(handlers::a001_marca::upsert),
        )
        .route(
            "/api/marca/:id",
            get(handlers::a001_marca::get_by_id).delete(handlers::a001_marca::delete),
        )
        .route(
            "/api/categoria",
            get(handlers::a002_categoria::list_all).post(handlers::a002_categoria::upsert),
        )
        .route(
            "/api/categoria/:id",
            get(handlers::a002_categoria::get_by_id).delete(handlers::a002_categoria::delete),
        )
        .route(
            "/api/subcategoria",
            get(handlers::a003_subcategoria::list_all).post(handlers::a003_subcategoria::upsert),
        )
        .route(
            "/api/subcategoria/por_categoria/:id",
            get(handlers::a003_subcategoria::list_by_categoria),
        )
        .route(
            "/api/subcategoria/:id",
            get(handlers::a003_subcategoria::get_by_id)
                .delete(handlers::a003_subcategoria::delete),
        )
        .route(
            "/api/producto",
            get(handlers::a004_producto::list_all).post(handlers::a004_producto::upsert),
        )
        .route("/api/producto/search", get(handlers::a004_producto::search))
        .route(
            "/api/producto/:id",
            get(handlers::a004_producto::get_by_id).delete(handlers::a004_producto::delete),
        )
        // ========================================
        // TERCEROS
        // ========================================
        .route(
            "/api/cliente",
            get(handlers::a005_cliente::list_all).post(handlers::a005_cliente::upsert),
        )
        .route("/api/cliente/search", get(handlers::a005_cliente::search))
        .route(
            "/api/cliente/:id",
            get(handlers::a005_cliente::get_by_id).delete(handlers::a005_cliente::delete),
        )
        .route(
            "/api/transportista",
            get(handlers::a006_transportista::list_all).post(handlers::a006_transportista::upsert),
        )
        .route(
            "/api/transportista/por_modalidad/:codigo",
            get(handlers::a006_transportista::list_by_modalidad),
        )
        .route(
            "/api/transportista/:id",
            get(handlers::a006_transportista::get_by_id)
                .delete(handlers::a006_transportista::delete),
        )
        .route(
            "/api/vehiculo",
            get(handlers::a007_vehiculo::list_all).post(handlers::a007_vehiculo::upsert),
        )
        .route(
            "/api/vehiculo/por_transportista/:id",
            get(handlers::a007_vehiculo::list_by_transportista),
        )
        .route(
            "/api/vehiculo/:id",
            get(handlers::a007_vehiculo::get_by_id).delete(handlers::a007_vehiculo::delete),
        )
        .route(
            "/api/almacen",
            get(handlers::a008_almacen::list_all).post(handlers::a008_almacen::upsert),
        )
        .route(
            "/api/almacen/:id",
            get(handlers::a008_almacen::get_by_id).delete(handlers::a008_almacen::delete),
        )
        // ========================================
        // DOCUMENTOS
        // ========================================
        .route(
            "/api/nota_ingreso",
            get(handlers::a009_nota_ingreso::list_all).post(handlers::a009_nota_ingreso::upsert),
        )
        .route(
            "/api/nota_ingreso/:id",
            get(handlers::a009_nota_ingreso::get_by_id)
                .delete(handlers::a009_nota_ingreso::delete),
        )
        .route(
            "/api/nota_ingreso/:id/post",
            post(handlers::a009_nota_ingreso::post_document),
        )
        .route(
            "/api/nota_ingreso/:id/unpost",
            post(handlers::a009_nota_ingreso::unpost_document),
        )
        .route(
            "/api/nota_salida",
            get(handlers::a010_nota_salida::list_all).post(handlers::a010_nota_salida::upsert),
        )
        .route(
            "/api/nota_salida/:id",
            get(handlers::a010_nota_salida::get_by_id).delete(handlers::a010_nota_salida::delete),
        )
        .route(
            "/api/nota_salida/:id/post",
            post(handlers::a010_nota_salida::post_document),
        )
        .route(
            "/api/nota_salida/:id/unpost",
            post(handlers::a010_nota_salida::unpost_document),
        )
        .route(
            "/api/guia_remision",
            get(handlers::a011_guia_remision::list_all),
        )
        .route(
            "/api/guia_remision/:id",
            get(handlers::a011_guia_remision::get_by_id)
                .delete(handlers::a011_guia_remision::delete),
        )
        .route(
            "/api/guia_remision/:id/enviar_sunat",
            post(handlers::a011_guia_remision::enviar_sunat),
        )
        // ========================================
        // REFERENCIA GEOGRÁFICA Y CONSULTAS
        // ========================================
        .route(
            "/api/ubigeo/departamentos",
            get(handlers::ubigeo::departamentos),
        )
        .route(
            "/api/ubigeo/provincias/:departamento",
            get(handlers::ubigeo::provincias),
        )
        .route(
            "/api/ubigeo/distritos/:provincia",
            get(handlers::ubigeo::distritos),
        )
        .route("/api/consulta/dni/:numero", get(handlers::consulta::dni))
        .route("/api/consulta/ruc/:numero", get(handlers::consulta::ruc))
        // UseCase u501: Registro de guía
        .route("/api/u501/registro", post(handlers::usecases::u501_registro))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port 3000 is already in use. Please ensure no other process is using this port."
                );
            } else {
                tracing::error!("Failed to bind to port 3000. Error: {}", e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
