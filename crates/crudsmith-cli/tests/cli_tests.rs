//! End-to-end tests for the `crudsmith` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's environment: no real config file,
/// no colour, and the temp dir as working directory.
fn crudsmith(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crudsmith").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CRUDSMITH_CONFIG");
    cmd
}

fn project(temp: &TempDir) -> &Path {
    temp.path()
}

fn walk_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk_files(&path));
        } else {
            files.push(path);
        }
    }
    files
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("guidelines"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn make_writes_full_stack() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "Product", "name:string", "price:decimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 10 files for Product"))
        .stdout(predicate::str::contains("php artisan migrate"))
        .stdout(predicate::str::contains(
            "Route::resource('products', ProductController::class);",
        ));

    let root = project(&temp);
    for file in [
        "app/Models/Product.php",
        "app/Http/Controllers/ProductController.php",
        "app/Http/Requests/StoreProductRequest.php",
        "app/Http/Requests/UpdateProductRequest.php",
        "app/Http/Resources/ProductResource.php",
        "resources/js/Pages/Products/Index.vue",
        "resources/js/Pages/Products/Create.vue",
        "resources/js/Pages/Products/Edit.vue",
        "resources/js/Pages/Products/Form.vue",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let migrations: Vec<_> = std::fs::read_dir(root.join("database/migrations"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(migrations.len(), 1);
    assert!(migrations[0].ends_with("_create_products_table.php"));
}

#[test]
fn crud_alias_and_path_flag() {
    let temp = TempDir::new().unwrap();
    let app = temp.path().join("shop");
    std::fs::create_dir(&app).unwrap();

    crudsmith(&temp)
        .args(["crud", "Tag", "label:string", "--no-views", "--path"])
        .arg(&app)
        .assert()
        .success();

    assert!(app.join("app/Models/Tag.php").is_file());
    assert!(!app.join("resources").exists());
    assert!(!temp.path().join("app").exists());
}

#[test]
fn second_run_conflicts_without_force() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "Product", "name:string", "--no-views"])
        .assert()
        .success();

    let model = project(&temp).join("app/Models/Product.php");
    std::fs::write(&model, "<?php // edited").unwrap();

    crudsmith(&temp)
        .args(["make", "Product", "name:string", "--no-views"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(std::fs::read_to_string(&model).unwrap(), "<?php // edited");
}

#[test]
fn force_overwrites() {
    let temp = TempDir::new().unwrap();
    let model = project(&temp).join("app/Models/Product.php");
    std::fs::create_dir_all(model.parent().unwrap()).unwrap();
    std::fs::write(&model, "<?php // edited").unwrap();

    crudsmith(&temp)
        .args(["make", "Product", "name:string", "--no-views", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "a failed run deletes them rather than restoring them",
        ));

    assert!(
        std::fs::read_to_string(&model)
            .unwrap()
            .contains("class Product extends Model")
    );
}

#[test]
fn invalid_field_type_writes_nothing() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "Product", "price:money"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid field type: money"))
        .stderr(predicate::str::contains("rolled back").not());

    assert!(!project(&temp).join("app").exists());
}

#[test]
fn write_failure_rolls_back_every_file() {
    let temp = TempDir::new().unwrap();
    let blocked = project(&temp).join("resources/js/Pages/Products/Edit.vue");
    std::fs::create_dir_all(&blocked).unwrap();

    crudsmith(&temp)
        .args(["make", "Product", "name:string"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("All changes have been rolled back."))
        .stderr(predicate::str::contains("Rollback incomplete").not());

    assert!(blocked.is_dir());
    let left = walk_files(project(&temp));
    assert!(left.is_empty(), "left behind: {left:?}");
}

#[test]
fn no_color_accepts_conventional_values() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        crudsmith(&temp)
            .env("NO_COLOR", value)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn guidelines_publish_once_then_need_force() {
    let temp = TempDir::new().unwrap();
    let target = project(&temp).join(".ai/guidelines/crudsmith.md");

    crudsmith(&temp)
        .arg("guidelines")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guidelines published to"));
    assert!(std::fs::read_to_string(&target).unwrap().starts_with("# CRUD conventions"));

    std::fs::write(&target, "# ours").unwrap();
    crudsmith(&temp)
        .arg("guidelines")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "# ours");

    crudsmith(&temp).args(["guidelines", "--force"]).assert().success();
    assert_ne!(std::fs::read_to_string(&target).unwrap(), "# ours");
}

#[test]
fn invalid_resource_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "1Product", "name:string"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must start with a letter"));
}

#[test]
fn reserved_word_is_rejected() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "Class", "name:string"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved word"));
}

#[test]
fn missing_fields_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp).args(["make", "Product"]).assert().code(2);
}

#[test]
fn json_output_describes_files() {
    let temp = TempDir::new().unwrap();
    let assert = crudsmith(&temp)
        .args([
            "--output-format",
            "json",
            "make",
            "OrderItem",
            "quantity:integer",
            "--table",
            "line_items",
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["file_count"], 10);
    assert_eq!(value["table"], "line_items");
    assert_eq!(value["route"], "order-items");
    assert_eq!(value["files"]["model"], "app/Models/OrderItem.php");
    assert_eq!(value["files"]["views"]["form"], "resources/js/Pages/OrderItems/Form.vue");
}

#[test]
fn config_file_changes_output_paths_and_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("crudsmith.toml");
    std::fs::write(
        &config,
        r#"
[generator.paths]
models = "src/Domain/Models"

[generator.defaults]
generate_views = false
"#,
    )
    .unwrap();

    crudsmith(&temp)
        .arg("--config")
        .arg(&config)
        .args(["make", "Invoice", "total:decimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 6 files"));

    assert!(project(&temp).join("src/Domain/Models/Invoice.php").is_file());
    assert!(!project(&temp).join("resources").exists());
}

#[test]
fn environment_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .env("CRUDSMITH_GENERATOR__DEFAULTS__SOFT_DELETES", "false")
        .args(["make", "Note", "body:text", "--no-views"])
        .assert()
        .success();

    let model = std::fs::read_to_string(project(&temp).join("app/Models/Note.php")).unwrap();
    assert!(!model.contains("SoftDeletes"));
}

#[test]
fn stub_directory_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("stubs")).unwrap();
    std::fs::write(
        temp.path().join("stubs/model.stub"),
        "<?php // custom {{ CLASS }} in {{ NAMESPACE }}\n",
    )
    .unwrap();
    let config = temp.path().join("crudsmith.toml");
    std::fs::write(&config, "[generator]\nstubs_dir = \"stubs\"\n").unwrap();

    crudsmith(&temp)
        .arg("--config")
        .arg(&config)
        .args(["make", "Product", "name:string", "--no-views"])
        .assert()
        .success();

    let model = std::fs::read_to_string(project(&temp).join("app/Models/Product.php")).unwrap();
    assert_eq!(model, "<?php // custom Product in App\\Models\n");
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn init_then_get() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf/crudsmith.toml");

    crudsmith(&temp)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.is_file());

    crudsmith(&temp)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    crudsmith(&temp)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "generator.namespaces.controller"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"App\Http\Controllers"));
}

#[test]
fn config_get_unknown_key() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["config", "get", "generator.nope"])
        .assert()
        .code(3);
}

#[test]
fn config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .code(4);

    std::fs::write(temp.path().join("custom.toml"), "").unwrap();
    crudsmith(&temp)
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudsmith"));
}

#[test]
fn log_file_receives_json_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs/run.log");

    crudsmith(&temp)
        .arg("-v")
        .arg("--log-file")
        .arg(&log)
        .args(["make", "Product", "name:string", "--no-views"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.lines().any(|l| l.contains("CRUD generated")));
}

#[test]
fn bad_table_name_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["make", "Product", "name:string", "--table", "Bad-Name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--table"));

    assert!(!project(&temp).join("app").exists());
}
