use contracts::shared::ubigeo::{UbigeoEntry, UbigeoOption};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use super::db::get_connection;

/// Semilla mínima del catálogo ubigeo (capitales de departamento y los
/// distritos de uso más frecuente). Para el catálogo completo basta dejar
/// un `ubigeo.csv` con el mismo formato junto al ejecutable.
const SEED_CSV: &str = "\
codigo,departamento,provincia,distrito
010101,Amazonas,Chachapoyas,Chachapoyas
020101,Ancash,Huaraz,Huaraz
021801,Ancash,Santa,Chimbote
030101,Apurimac,Abancay,Abancay
040101,Arequipa,Arequipa,Arequipa
040103,Arequipa,Arequipa,Cayma
040129,Arequipa,Arequipa,Yanahuara
050101,Ayacucho,Huamanga,Ayacucho
060101,Cajamarca,Cajamarca,Cajamarca
070101,Callao,Callao,Callao
070106,Callao,Callao,Ventanilla
080101,Cusco,Cusco,Cusco
080108,Cusco,Cusco,Wanchaq
090101,Huancavelica,Huancavelica,Huancavelica
100101,Huanuco,Huanuco,Huanuco
110101,Ica,Ica,Ica
110501,Ica,Pisco,Pisco
120101,Junin,Huancayo,Huancayo
120114,Junin,Huancayo,El Tambo
130101,La Libertad,Trujillo,Trujillo
130111,La Libertad,Trujillo,Victor Larco Herrera
140101,Lambayeque,Chiclayo,Chiclayo
150101,Lima,Lima,Lima
150103,Lima,Lima,Ate
150108,Lima,Lima,Brena
150110,Lima,Lima,Comas
150115,Lima,Lima,La Victoria
150120,Lima,Lima,Lince
150122,Lima,Lima,Miraflores
150130,Lima,Lima,San Borja
150131,Lima,Lima,San Isidro
150132,Lima,Lima,San Juan de Lurigancho
150133,Lima,Lima,San Juan de Miraflores
150136,Lima,Lima,San Martin de Porres
150140,Lima,Lima,Santiago de Surco
150142,Lima,Lima,Villa El Salvador
150701,Lima,Huaura,Huacho
160101,Loreto,Maynas,Iquitos
170101,Madre de Dios,Tambopata,Tambopata
180101,Moquegua,Mariscal Nieto,Moquegua
190101,Pasco,Pasco,Chaupimarca
200101,Piura,Piura,Piura
200601,Piura,Sullana,Sullana
210101,Puno,Puno,Puno
211101,Puno,San Roman,Juliaca
220901,San Martin,San Martin,Tarapoto
230101,Tacna,Tacna,Tacna
240101,Tumbes,Tumbes,Tumbes
250101,Ucayali,Coronel Portillo,Calleria
";

/// Parsea un CSV `codigo,departamento,provincia,distrito` a filas de catálogo
pub fn parse_csv(contents: &str) -> anyhow::Result<Vec<UbigeoEntry>> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut entries = Vec::new();
    for record in reader.deserialize::<UbigeoEntry>() {
        let entry = record?;
        if entry.codigo.len() == 6 {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Carga el catálogo: `ubigeo.csv` junto al ejecutable si existe, si no la
/// semilla embebida
fn load_seed() -> anyhow::Result<Vec<UbigeoEntry>> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let csv_path = exe_dir.join("ubigeo.csv");
            if csv_path.exists() {
                tracing::info!("Loading ubigeo catalog from {}", csv_path.display());
                let contents = std::fs::read_to_string(&csv_path)?;
                return parse_csv(&contents);
            }
        }
    }
    parse_csv(SEED_CSV)
}

/// Siembra la tabla ubigeo si está vacía
pub async fn seed_if_empty(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let count_rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM ubigeo;".to_string(),
        ))
        .await?;
    let count: i64 = count_rows
        .first()
        .and_then(|row| row.try_get("", "n").ok())
        .unwrap_or(0);
    if count > 0 {
        return Ok(());
    }

    let entries = load_seed()?;
    tracing::info!("Seeding ubigeo catalog with {} rows", entries.len());
    for entry in &entries {
        let insert = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO ubigeo (codigo, departamento, provincia, distrito) VALUES (?, ?, ?, ?);",
            [
                entry.codigo.clone().into(),
                entry.departamento.clone().into(),
                entry.provincia.clone().into(),
                entry.distrito.clone().into(),
            ],
        );
        conn.execute(insert).await?;
    }
    Ok(())
}

async fn load_all() -> anyhow::Result<Vec<UbigeoEntry>> {
    let rows = get_connection()
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT codigo, departamento, provincia, distrito FROM ubigeo ORDER BY codigo;"
                .to_string(),
        ))
        .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        entries.push(UbigeoEntry {
            codigo: row.try_get("", "codigo")?,
            departamento: row.try_get("", "departamento")?,
            provincia: row.try_get("", "provincia")?,
            distrito: row.try_get("", "distrito")?,
        });
    }
    Ok(entries)
}

// Derivaciones sobre el catálogo en memoria. El catálogo completo tiene
// menos de 2.000 filas, filtrar en la aplicación es suficiente.

pub fn departamentos_de(entries: &[UbigeoEntry]) -> Vec<UbigeoOption> {
    let mut out: Vec<UbigeoOption> = Vec::new();
    for entry in entries {
        let codigo = entry.codigo_departamento().to_string();
        if !out.iter().any(|o| o.codigo == codigo) {
            out.push(UbigeoOption {
                codigo,
                nombre: entry.departamento.clone(),
            });
        }
    }
    out
}

pub fn provincias_de(entries: &[UbigeoEntry], departamento: &str) -> Vec<UbigeoOption> {
    let mut out: Vec<UbigeoOption> = Vec::new();
    for entry in entries {
        if entry.codigo_departamento() != departamento {
            continue;
        }
        let codigo = entry.codigo_provincia().to_string();
        if !out.iter().any(|o| o.codigo == codigo) {
            out.push(UbigeoOption {
                codigo,
                nombre: entry.provincia.clone(),
            });
        }
    }
    out
}

pub fn distritos_de(entries: &[UbigeoEntry], provincia: &str) -> Vec<UbigeoOption> {
    entries
        .iter()
        .filter(|entry| entry.codigo_provincia() == provincia)
        .map(|entry| UbigeoOption {
            codigo: entry.codigo.clone(),
            nombre: entry.distrito.clone(),
        })
        .collect()
}

// API pública usada por los handlers

pub async fn departamentos() -> anyhow::Result<Vec<UbigeoOption>> {
    Ok(departamentos_de(&load_all().await?))
}

pub async fn provincias(departamento: &str) -> anyhow::Result<Vec<UbigeoOption>> {
    Ok(provincias_de(&load_all().await?, departamento))
}

pub async fn distritos(provincia: &str) -> anyhow::Result<Vec<UbigeoOption>> {
    Ok(distritos_de(&load_all().await?, provincia))
}

/// Busca la fila de un código exacto (para mostrar nombres en documentos)
pub async fn por_codigo(codigo: &str) -> anyhow::Result<Option<UbigeoEntry>> {
    Ok(load_all()
        .await?
        .into_iter()
        .find(|entry| entry.codigo == codigo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let entries = parse_csv(SEED_CSV).unwrap();
        assert!(entries.len() >= 40);
        assert!(entries.iter().all(|e| e.codigo.len() == 6));
    }

    #[test]
    fn test_cascada_departamento_provincia_distrito() {
        let entries = parse_csv(SEED_CSV).unwrap();

        let deps = departamentos_de(&entries);
        // los 24 departamentos más el Callao
        assert_eq!(deps.len(), 25);
        assert!(deps.iter().any(|d| d.codigo == "15" && d.nombre == "Lima"));

        let provs = provincias_de(&entries, "15");
        assert!(provs.iter().any(|p| p.codigo == "1501"));
        assert!(provs.iter().any(|p| p.codigo == "1507"));

        let dists = distritos_de(&entries, "1501");
        assert!(dists.iter().any(|d| d.codigo == "150122" && d.nombre == "Miraflores"));
        // un distrito de otra provincia no aparece
        assert!(!dists.iter().any(|d| d.codigo == "150701"));
    }

    #[test]
    fn test_provincias_departamento_inexistente() {
        let entries = parse_csv(SEED_CSV).unwrap();
        assert!(provincias_de(&entries, "99").is_empty());
    }
}
