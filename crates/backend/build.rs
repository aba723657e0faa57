use std::env;
use std::fs;
use std::path::Path;

// Copia config.toml y ubigeo.csv desde la raíz del workspace al directorio
// del binario: el backend los busca junto al ejecutable.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../ubigeo.csv");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" o "release"

    // OUT_DIR es del estilo target/debug/build/backend-xxx/out;
    // subimos hasta target/debug o target/release
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    copy_if_exists(&workspace_root.join("config.toml"), target_dir);
    copy_if_exists(&workspace_root.join("ubigeo.csv"), target_dir);
}

fn copy_if_exists(source: &Path, target_dir: &Path) {
    let Some(name) = source.file_name() else {
        return;
    };
    if source.exists() {
        let dest = target_dir.join(name);
        fs::copy(source, &dest)
            .unwrap_or_else(|e| panic!("Failed to copy {}: {}", source.display(), e));
        println!("cargo:warning=Copied {} to {:?}", source.display(), dest);
    } else {
        println!(
            "cargo:warning={} not found, using embedded defaults",
            source.display()
        );
    }
}
