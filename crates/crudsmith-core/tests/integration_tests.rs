//! Integration tests for crudsmith-core, driven through the public API.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crudsmith_core::domain::naming::{to_pascal_case, to_plural, to_route_name, to_snake_case, to_table_name};
use crudsmith_core::prelude::*;

#[derive(Clone, Default)]
struct SharedFs(Arc<Mutex<BTreeMap<PathBuf, String>>>);

impl SharedFs {
    fn read(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Filesystem for SharedFs {
    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
    fn remove_file(&self, path: &Path) -> CrudResult<()> {
        self.0.lock().unwrap().remove(path);
        Ok(())
    }
    fn create_dir_all(&self, _path: &Path) -> CrudResult<()> {
        Ok(())
    }
    fn list_matching(&self, _dir: &Path, _pattern: &str) -> CrudResult<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

/// Renders every token as `KEY=value` lines so assertions can see them.
struct DumpRenderer;

impl TemplateRenderer for DumpRenderer {
    fn render(&self, id: TemplateId, tokens: &TokenMap) -> CrudResult<String> {
        let mut out = format!("# {id}\n");
        for key in tokens.keys() {
            out.push_str(&format!("{key}={}\n", tokens.get(key).unwrap_or_default()));
        }
        Ok(out)
    }
}

struct FrozenClock;

impl Clock for FrozenClock {
    fn migration_timestamp(&self) -> String {
        "2026_01_02_030405".into()
    }
}

fn generator(fs: &SharedFs) -> CrudGenerator {
    CrudGenerator::new(
        Box::new(fs.clone()),
        Box::new(DumpRenderer),
        Box::new(FrozenClock),
        GeneratorConfig::default(),
    )
}

#[test]
fn test_full_generation_workflow() {
    let fs = SharedFs::default();
    let result = generator(&fs)
        .generate(
            "Product",
            &["name:string", "price:decimal"],
            OptionOverrides::default(),
        )
        .unwrap();

    assert_eq!(result.file_count(), 10);
    assert_eq!(fs.len(), 10);

    let migration = fs
        .read("database/migrations/2026_01_02_030405_create_products_table.php")
        .unwrap();
    assert!(migration.contains("$table->string('name');"));
    assert!(migration.contains("$table->decimal('price');"));
    assert!(migration.contains("$table->softDeletes();"));
}

#[test]
fn test_table_override_reaches_every_artifact() {
    let fs = SharedFs::default();
    let overrides = OptionOverrides {
        table: Some("catalog".into()),
        ..OptionOverrides::default()
    };
    let result = generator(&fs)
        .generate("Product", &["sku:string:unique"], overrides)
        .unwrap();

    assert_eq!(result.table_name(), "catalog");
    assert!(result
        .path(ArtifactKind::Migration)
        .unwrap()
        .ends_with("2026_01_02_030405_create_catalog_table.php"));

    let model = fs.read("app/Models/Product.php").unwrap();
    assert!(model.contains("protected $table = 'catalog';"));

    let store = fs.read("app/Http/Requests/StoreProductRequest.php").unwrap();
    assert!(store.contains("'unique:catalog,sku'"));
}

#[test]
fn test_rule_tokens_do_not_leak_placeholder() {
    let fs = SharedFs::default();
    generator(&fs)
        .generate("User", &["email:string:unique"], OptionOverrides::default())
        .unwrap();

    for path in [
        "app/Http/Requests/StoreUserRequest.php",
        "app/Http/Requests/UpdateUserRequest.php",
    ] {
        assert!(!fs.read(path).unwrap().contains("table_name"), "{path}");
    }
}

#[test]
fn test_naming_properties() {
    for snake in ["user", "user_profile", "order_line_item"] {
        assert_eq!(to_snake_case(&to_pascal_case(snake)), snake);
    }
    assert_eq!(to_table_name("UserProfile"), "user_profiles");
    assert_eq!(to_route_name("OrderItem"), "order-items");
    assert_eq!(to_plural("person"), "people");
}
