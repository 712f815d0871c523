use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "Shoe, 15 USD, 50 unidades, M\nHat, 8 USD, 20 unidades,\n";

fn inventario(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("inventario").unwrap();
    cmd.env_remove("INVENTARIO_FILE").arg("--file").arg(file);
    cmd
}

fn setup(contents: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("inventario.txt");
    if let Some(contents) = contents {
        fs::write(&file, contents).unwrap();
    }
    (temp_dir, file)
}

#[test]
fn test_list_sample_file() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Producto(ID: 1, Nombre: Shoe, Precio: 15 USD, Unidades: 50 unidades, Talla: M)",
        ))
        .stdout(predicate::str::contains(
            "Producto(ID: 2, Nombre: Hat, Precio: 8 USD, Unidades: 20 unidades, Talla: )",
        ));
}

#[test]
fn test_list_missing_file_is_empty() {
    let (_dir, file) = setup(None);

    inventario(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventario vacío."));

    assert!(!file.exists());
}

#[test]
fn test_delete_renumbers_and_rewrites_file() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Producto eliminado y archivo actualizado.",
        ));

    assert_eq!(fs::read_to_string(&file).unwrap(), "Hat, 8 USD, 20 unidades, \n");

    inventario(&file)
        .args(["search", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Producto(ID: 1, Nombre: Hat"));
}

#[test]
fn test_delete_unknown_id_leaves_file_alone() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["delete", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Producto no encontrado."));

    assert_eq!(fs::read_to_string(&file).unwrap(), SAMPLE);
}

#[test]
fn test_delete_invalid_id_fails() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid product id 'abc'"));
}

#[test]
fn test_add_appends_line() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["add", "Sock", "2 USD", "100 unidades"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Producto agregado (append)."))
        .stdout(predicate::str::contains("Producto(ID: 3, Nombre: Sock"));

    let contents = fs::read_to_string(&file).unwrap();
    assert!(contents.ends_with("Sock, 2 USD, 100 unidades, \n"));
}

#[test]
fn test_search_by_name_is_case_insensitive() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["search", "SHO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nombre: Shoe"))
        .stdout(predicate::str::contains("Nombre: Hat").not());

    inventario(&file)
        .args(["search", "boot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No se encontraron productos."));
}

#[test]
fn test_update_fields() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["update", "2", "--price", "9 USD", "--size", "L"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Producto(ID: 2, Nombre: Hat, Precio: 9 USD, Unidades: 20 unidades, Talla: L)",
        ));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Shoe, 15 USD, 50 unidades, M\nHat, 9 USD, 20 unidades, L\n"
    );
}

#[test]
fn test_update_without_fields_fails() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file).args(["update", "1"]).assert().failure();

    assert_eq!(fs::read_to_string(&file).unwrap(), SAMPLE);
}

#[test]
fn test_info() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Tamaño: {} bytes",
            SAMPLE.len()
        )))
        .stdout(predicate::str::contains("Última mod.:"));
}

#[test]
fn test_info_missing_file() {
    let (_dir, file) = setup(None);

    inventario(&file)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archivo no encontrado."));
}

#[test]
fn test_backup_create_and_list() {
    let (dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copia creada en:"));

    let backups: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("inventario_backup_") && name.ends_with(".txt"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
        SAMPLE
    );

    inventario(&file)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(backups[0].as_str()))
        .stdout(predicate::str::contains("Total: 1 backup(s)"));
}

#[test]
fn test_backup_missing_file() {
    let (dir, file) = setup(None);

    inventario(&file)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No existe el archivo a respaldar."));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_csv() {
    let (dir, file) = setup(Some(SAMPLE));
    let output = dir.path().join("out.csv");

    inventario(&file)
        .arg("export")
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 products"));

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("ID,Name,Price,Units,Size\n"));
    assert!(contents.contains("1,Shoe,15 USD,50 unidades,M\n"));
}

#[test]
fn test_export_json() {
    let (dir, file) = setup(Some(SAMPLE));
    let output = dir.path().join("out.json");

    inventario(&file)
        .arg("export")
        .arg(&output)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["product_count"], 2);
    assert_eq!(value["products"][1]["name"], "Hat");
}

#[test]
fn test_audit_records_mutations() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .args(["add", "Sock", "2 USD", "100 unidades", "S"])
        .assert()
        .success();
    inventario(&file).args(["delete", "1"]).assert().success();

    inventario(&file)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Product 3 (Sock)"))
        .stdout(predicate::str::contains("DELETE Product 1 (Shoe)"));
}

#[test]
fn test_config_write_defaults() {
    let (dir, file) = setup(None);

    inventario(&file)
        .args(["config", "--write-defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit enabled: true"));

    assert!(dir.path().join("inventario.config.json").exists());
}

#[test]
fn test_bad_date_format_is_reported() {
    let (dir, file) = setup(Some(SAMPLE));
    fs::write(
        dir.path().join("inventario.config.json"),
        r#"{"date_format": "%d/%m %Q"}"#,
    )
    .unwrap();

    inventario(&file)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}

#[test]
fn test_delete_with_unwritable_audit_log() {
    let (dir, file) = setup(Some(SAMPLE));
    fs::create_dir(dir.path().join("inventario.audit.log")).unwrap();

    inventario(&file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Producto eliminado y archivo actualizado.",
        ))
        .stderr(predicate::str::contains("Warning: audit log not updated"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "Hat, 8 USD, 20 unidades, \n");
}

#[test]
fn test_each_backing_file_has_its_own_audit_log() {
    let (dir, file) = setup(Some(SAMPLE));
    let other = dir.path().join("other.txt");

    inventario(&file)
        .args(["add", "Sock", "2 USD", "100 unidades"])
        .assert()
        .success();
    inventario(&other)
        .args(["add", "Belt", "12 USD", "3 unidades"])
        .assert()
        .success();

    assert!(dir.path().join("inventario.audit.log").exists());
    assert!(dir.path().join("other.audit.log").exists());

    inventario(&other)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Belt)"))
        .stdout(predicate::str::contains("(Sock)").not());
}

#[test]
fn test_file_from_environment() {
    let (_dir, file) = setup(Some(SAMPLE));

    Command::cargo_bin("inventario")
        .unwrap()
        .env("INVENTARIO_FILE", &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nombre: Shoe"));
}

#[test]
fn test_shell_session_add_then_load() {
    let (_dir, file) = setup(None);

    inventario(&file)
        .write_stdin("2\nShoe\n15 USD\n50 unidades\nM\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Producto agregado (append)."))
        .stdout(predicate::str::contains("Inventario inicial:"))
        .stdout(predicate::str::contains(
            "Producto(ID: 1, Nombre: Shoe, Precio: 15 USD, Unidades: 50 unidades, Talla: M)",
        ))
        .stdout(predicate::str::contains("Saliendo..."));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Shoe, 15 USD, 50 unidades, M\n"
    );
}

#[test]
fn test_shell_modify_session() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .arg("shell")
        .write_stdin("4\n2\n2\n9 USD\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modificando el siguiente producto:"))
        .stdout(predicate::str::contains("Saliendo de la modificación."));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Shoe, 15 USD, 50 unidades, M\nHat, 9 USD, 20 unidades, \n"
    );
}

#[test]
fn test_shell_invalid_option_then_eof() {
    let (_dir, file) = setup(Some(SAMPLE));

    inventario(&file)
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opción no válida. Intente de nuevo."));
}
