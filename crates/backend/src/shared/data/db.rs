use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Crea la tabla solo si no existe todavía (bootstrap mínimo de esquema)
async fn ensure_table(
    conn: &DatabaseConnection,
    table_name: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table_name
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/almacen.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_table(
        &conn,
        "a001_marca",
        r#"
        CREATE TABLE a001_marca (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a002_categoria",
        r#"
        CREATE TABLE a002_categoria (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a003_subcategoria",
        r#"
        CREATE TABLE a003_subcategoria (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            categoria_ref TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a004_producto",
        r#"
        CREATE TABLE a004_producto (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            codigo_barras TEXT NOT NULL DEFAULT '',
            marca_ref TEXT,
            categoria_ref TEXT,
            subcategoria_ref TEXT,
            unidad TEXT NOT NULL DEFAULT 'NIU',
            precio_venta REAL NOT NULL DEFAULT 0,
            stock REAL NOT NULL DEFAULT 0,
            stock_minimo REAL NOT NULL DEFAULT 0,
            variante TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a005_cliente",
        r#"
        CREATE TABLE a005_cliente (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            tipo_persona TEXT NOT NULL DEFAULT 'natural',
            tipo_documento TEXT NOT NULL DEFAULT '1',
            numero_documento TEXT NOT NULL DEFAULT '',
            apellidos TEXT NOT NULL DEFAULT '',
            nombres TEXT NOT NULL DEFAULT '',
            direccion TEXT NOT NULL DEFAULT '',
            ubigeo TEXT NOT NULL DEFAULT '',
            telefono TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a006_transportista",
        r#"
        CREATE TABLE a006_transportista (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            tipo_transporte TEXT NOT NULL DEFAULT '01',
            ruc TEXT NOT NULL DEFAULT '',
            conductor_dni TEXT NOT NULL DEFAULT '',
            conductor_nombres TEXT NOT NULL DEFAULT '',
            conductor_licencia TEXT NOT NULL DEFAULT '',
            telefono TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a007_vehiculo",
        r#"
        CREATE TABLE a007_vehiculo (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            placa TEXT NOT NULL DEFAULT '',
            transportista_ref TEXT NOT NULL DEFAULT '',
            marca TEXT NOT NULL DEFAULT '',
            modelo TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a008_almacen",
        r#"
        CREATE TABLE a008_almacen (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            direccion TEXT NOT NULL DEFAULT '',
            ubigeo TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a009_nota_ingreso",
        r#"
        CREATE TABLE a009_nota_ingreso (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            numero TEXT NOT NULL DEFAULT '',
            fecha TEXT NOT NULL DEFAULT '',
            almacen_ref TEXT NOT NULL DEFAULT '',
            proveedor TEXT NOT NULL DEFAULT '',
            observacion TEXT NOT NULL DEFAULT '',
            lines_json TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a010_nota_salida",
        r#"
        CREATE TABLE a010_nota_salida (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            numero TEXT NOT NULL DEFAULT '',
            fecha TEXT NOT NULL DEFAULT '',
            almacen_ref TEXT NOT NULL DEFAULT '',
            motivo TEXT NOT NULL DEFAULT '',
            observacion TEXT NOT NULL DEFAULT '',
            lines_json TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a011_guia_remision",
        r#"
        CREATE TABLE a011_guia_remision (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            serie TEXT NOT NULL DEFAULT 'T001',
            correlativo INTEGER NOT NULL DEFAULT 0,
            fecha_emision TEXT NOT NULL DEFAULT '',
            fecha_traslado TEXT NOT NULL DEFAULT '',
            motivo TEXT NOT NULL DEFAULT '01',
            modalidad TEXT NOT NULL DEFAULT '01',
            destinatario_ref TEXT NOT NULL DEFAULT '',
            transportista_ref TEXT NOT NULL DEFAULT '',
            vehiculo_ref TEXT,
            almacen_ref TEXT NOT NULL DEFAULT '',
            partida_ubigeo TEXT NOT NULL DEFAULT '',
            partida_direccion TEXT NOT NULL DEFAULT '',
            llegada_ubigeo TEXT NOT NULL DEFAULT '',
            llegada_direccion TEXT NOT NULL DEFAULT '',
            peso_bruto REAL NOT NULL DEFAULT 0,
            bultos INTEGER NOT NULL DEFAULT 1,
            lines_json TEXT,
            estado_sunat TEXT NOT NULL DEFAULT 'pendiente',
            sunat_ticket TEXT,
            sunat_error TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "ubigeo",
        r#"
        CREATE TABLE ubigeo (
            codigo TEXT PRIMARY KEY NOT NULL,
            departamento TEXT NOT NULL,
            provincia TEXT NOT NULL,
            distrito TEXT NOT NULL
        );
    "#,
    )
    .await?;

    // Catálogo geográfico: se siembra una sola vez
    super::ubigeo::seed_if_empty(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
