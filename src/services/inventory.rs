//! Inventory service
//!
//! Every operation re-reads the backing file before acting and, when it
//! mutates, rewrites the whole file. Nothing is kept between calls, so an edit
//! made by another process between the read and the write is silently lost.

use std::path::PathBuf;

use crate::audit::EntityType;
use crate::backup::BackupManager;
use crate::error::InventoryResult;
use crate::models::{Product, ProductField, ProductInput, ProductPatch};
use crate::storage::{FileInfo, Storage};

/// How a search term is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact ordinal id
    Id(usize),
    /// Case-insensitive substring of the name
    Name(String),
}

impl SearchQuery {
    /// A non-empty all-digit term is an id, anything else a name fragment
    ///
    /// A digit string too large for `usize` can't match any id, so it is kept
    /// as an id query that matches nothing.
    pub fn parse(term: &str) -> Self {
        if is_all_digits(term) {
            Self::Id(term.parse().unwrap_or(usize::MAX))
        } else {
            Self::Name(term.to_string())
        }
    }

    /// Whether a product satisfies the query
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SearchQuery::Id(id) => product.id == *id,
            SearchQuery::Name(term) => product.name_contains(term),
        }
    }
}

/// Parse user input as a product id
///
/// Returns `None` unless the input is a non-empty run of ASCII digits.
pub fn parse_id(input: &str) -> Option<usize> {
    if is_all_digits(input) {
        Some(input.parse().unwrap_or(usize::MAX))
    } else {
        None
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Service for inventory operations
pub struct InventoryService<'a> {
    storage: &'a Storage,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load every product in file order
    pub fn list(&self) -> InventoryResult<Vec<Product>> {
        self.storage.inventory.load()
    }

    /// Find a product by ordinal id
    pub fn find(&self, id: usize) -> InventoryResult<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// Products matching a search term
    pub fn search(&self, term: &str) -> InventoryResult<Vec<Product>> {
        let query = SearchQuery::parse(term);
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| query.matches(p))
            .collect())
    }

    /// Append a product, giving it the id after the current last one
    ///
    /// The id is computed from a fresh load and the line is appended without
    /// re-checking the file in between.
    pub fn add(&self, input: ProductInput) -> InventoryResult<Product> {
        let id = self.storage.inventory.next_id()?;
        let product = Product::from_input(id, input);

        self.storage.inventory.append(&product)?;

        self.storage.log_create(
            EntityType::Product,
            product.id.to_string(),
            Some(product.name.clone()),
            &product,
        );

        Ok(product)
    }

    /// Overwrite one field of a product and save the file
    ///
    /// Returns the updated product, or `None` if no product has that id.
    pub fn update_field(
        &self,
        id: usize,
        field: ProductField,
        value: &str,
    ) -> InventoryResult<Option<Product>> {
        self.update(id, &ProductPatch::single(field, value))
    }

    /// Apply a patch to a product in one reload-mutate-save cycle
    ///
    /// The file is rewritten even when the patch changes nothing.
    pub fn update(&self, id: usize, patch: &ProductPatch) -> InventoryResult<Option<Product>> {
        let mut products = self.list()?;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let before = product.clone();
        let changed = product.apply_patch(patch);
        let after = product.clone();

        self.storage.inventory.save(&products)?;

        if changed {
            self.storage.log_update(
                EntityType::Product,
                id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
            );
        }

        Ok(Some(after))
    }

    /// Remove a product and renumber the rest from 1
    ///
    /// Returns the removed product, or `None` if no product has that id (in
    /// which case the file is left untouched).
    pub fn delete(&self, id: usize) -> InventoryResult<Option<Product>> {
        let mut products = self.list()?;

        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let removed = products.remove(index);
        for (i, product) in products.iter_mut().enumerate() {
            product.id = i + 1;
        }

        self.storage.inventory.save(&products)?;

        self.storage.log_delete(
            EntityType::Product,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Copy the backing file to a timestamped sibling
    pub fn backup(&self) -> InventoryResult<Option<PathBuf>> {
        let manager = BackupManager::new(self.storage.paths().data_file());
        let destination = manager.create_backup()?;

        if let Some(path) = &destination {
            self.storage.log_backup(path);
        }

        Ok(destination)
    }

    /// Size and modification time of the backing file
    pub fn file_info(&self) -> InventoryResult<Option<FileInfo>> {
        self.storage.inventory.file_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{InventoryPaths, Settings};
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "Shoe, 15 USD, 50 unidades, M\nHat, 8 USD, 20 unidades,\nSocks, 3 USD, 100 unidades, S\n";

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_data_file(temp_dir.path().join("inventario.txt"));
        let storage = Storage::new(paths, &Settings::default());
        fs::write(storage.inventory.path(), SAMPLE).unwrap();
        (storage, temp_dir)
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.into(),
            price: "5 USD".into(),
            units: "12 unidades".into(),
            size: String::new(),
        }
    }

    #[test]
    fn test_search_query_parse() {
        assert_eq!(SearchQuery::parse("12"), SearchQuery::Id(12));
        assert_eq!(SearchQuery::parse("hat"), SearchQuery::Name("hat".into()));
        assert_eq!(SearchQuery::parse("12a"), SearchQuery::Name("12a".into()));
        assert_eq!(SearchQuery::parse("-1"), SearchQuery::Name("-1".into()));
        assert_eq!(SearchQuery::parse(""), SearchQuery::Name(String::new()));
        assert_eq!(
            SearchQuery::parse("99999999999999999999999"),
            SearchQuery::Id(usize::MAX)
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3"), Some(3));
        assert_eq!(parse_id("003"), Some(3));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("x"), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn test_search_by_id() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let results = service.search("2").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Hat");

        assert!(service.search("9").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_name() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let results = service.search("SO").unwrap();
        let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Socks"]);

        let results = service.search("h").unwrap();
        assert_eq!(results.len(), 2);

        // Empty term matches everything
        assert_eq!(service.search("").unwrap().len(), 3);
    }

    #[test]
    fn test_add_assigns_next_id() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let added = service.add(input("Scarf")).unwrap();
        assert_eq!(added.id, 4);

        let products = service.list().unwrap();
        assert_eq!(products.last().unwrap(), &added);
    }

    #[test]
    fn test_update_field_saves_immediately() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let updated = service
            .update_field(2, ProductField::Price, "9 USD")
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, "9 USD");

        let contents = fs::read_to_string(storage.inventory.path()).unwrap();
        assert!(contents.contains("Hat, 9 USD, 20 unidades, \n"));
    }

    #[test]
    fn test_update_missing_id() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);
        let before = fs::read_to_string(storage.inventory.path()).unwrap();

        assert!(service
            .update_field(7, ProductField::Name, "Ghost")
            .unwrap()
            .is_none());
        assert_eq!(fs::read_to_string(storage.inventory.path()).unwrap(), before);
    }

    #[test]
    fn test_update_with_patch() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let patch = ProductPatch {
            units: Some("40 unidades".into()),
            size: Some("L".into()),
            ..Default::default()
        };
        let updated = service.update(1, &patch).unwrap().unwrap();

        assert_eq!(updated, Product::new(1, "Shoe", "15 USD", "40 unidades", "L"));
        assert_eq!(service.find(1).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_delete_renumbers() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let removed = service.delete(1).unwrap().unwrap();
        assert_eq!(removed.name, "Shoe");

        let products = service.list().unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(names, vec!["Hat", "Socks"]);
    }

    #[test]
    fn test_delete_missing_id_leaves_file() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        assert!(service.delete(4).unwrap().is_none());
        assert_eq!(fs::read_to_string(storage.inventory.path()).unwrap(), SAMPLE);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        service.add(input("Scarf")).unwrap();
        service.update_field(1, ProductField::Size, "L").unwrap();
        // No-op update is not logged
        service.update_field(1, ProductField::Size, "L").unwrap();
        service.delete(2).unwrap();
        service.backup().unwrap();

        let ops: Vec<_> = storage
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            ops,
            vec![Operation::Create, Operation::Update, Operation::Delete, Operation::Backup]
        );
    }

    #[test]
    fn test_backup_and_info() {
        let (storage, _temp) = create_test_storage();
        let service = InventoryService::new(&storage);

        let info = service.file_info().unwrap().unwrap();
        assert_eq!(info.size_bytes, SAMPLE.len() as u64);

        let backup = service.backup().unwrap().unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), SAMPLE);
    }

    #[test]
    fn test_backup_and_info_on_missing_file() {
        let (storage, _temp) = create_test_storage();
        fs::remove_file(storage.inventory.path()).unwrap();
        let service = InventoryService::new(&storage);

        assert!(service.backup().unwrap().is_none());
        assert!(service.file_info().unwrap().is_none());
        assert!(service.list().unwrap().is_empty());
    }
}
