//! Catalog Service
//!
//! Product views with the resolved image order (primary image first), plus
//! the admin-side mutations that keep image rows and files in sync.

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::db::models::{Product, ProductCreate, ProductImage, ProductUpdate, ProductView};
use crate::db::repository;
use crate::services::image_store::{ImageStore, UploadedImage};
use crate::utils::{AppError, AppResult, now_millis};

/// Catalog service over the shared pool and the product image store
#[derive(Debug, Clone)]
pub struct CatalogService {
    pool: SqlitePool,
    images: ImageStore,
}

impl CatalogService {
    pub fn new(pool: SqlitePool, images: ImageStore) -> Self {
        Self { pool, images }
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// List every product with its resolved image order.
    ///
    /// Products ordered by (category, name); image rows fetched in one query
    /// and grouped in memory. Best-effort consistency: no locking, a product
    /// deleted mid-read is absent, never partial.
    pub async fn list_products(&self) -> AppResult<Vec<ProductView>> {
        let products = repository::product::find_all(&self.pool).await?;
        let rows = repository::product_image::find_all(&self.pool).await?;

        let mut by_product: HashMap<i64, Vec<ProductImage>> = HashMap::new();
        for row in rows {
            by_product.entry(row.product_id).or_default().push(row);
        }

        Ok(products
            .into_iter()
            .map(|p| {
                let images = by_product.remove(&p.id).unwrap_or_default();
                assemble(p, images)
            })
            .collect())
    }

    /// Get one product with its resolved image order
    pub async fn get_product(&self, id: i64) -> AppResult<ProductView> {
        let product = repository::product::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
        let images = repository::product_image::find_by_product(&self.pool, id).await?;
        Ok(assemble(product, images))
    }

    /// Distinct categories, ascending
    pub async fn list_categories(&self) -> AppResult<Vec<String>> {
        Ok(repository::product::distinct_categories(&self.pool).await?)
    }

    // =========================================================================
    // Write (admin)
    // =========================================================================

    /// Create a product with its uploaded images.
    ///
    /// The row is inserted first, so a duplicate code conflicts before any
    /// file lands on disk. The first upload becomes the primary image.
    pub async fn create_product(
        &self,
        data: ProductCreate,
        uploads: Vec<UploadedImage>,
    ) -> AppResult<ProductView> {
        let now = now_millis();
        let product = repository::product::create(&self.pool, &data, now).await?;

        for (index, upload) in uploads.iter().enumerate() {
            let stored = self.images.save(&upload.original_name, &upload.data)?;
            repository::product_image::insert(
                &self.pool,
                product.id,
                &stored,
                &upload.original_name,
                index == 0,
                now,
            )
            .await?;
        }

        tracing::info!(
            product_id = product.id,
            code = %product.code,
            images = uploads.len(),
            "Product created"
        );
        self.get_product(product.id).await
    }

    /// Update a product's scalar fields; new uploads append as non-primary
    /// rows, existing images and the primary flag stay untouched.
    pub async fn update_product(
        &self,
        id: i64,
        data: ProductUpdate,
        uploads: Vec<UploadedImage>,
    ) -> AppResult<ProductView> {
        let now = now_millis();
        let product = repository::product::update(&self.pool, id, &data, now).await?;

        for upload in &uploads {
            let stored = self.images.save(&upload.original_name, &upload.data)?;
            repository::product_image::insert(
                &self.pool,
                product.id,
                &stored,
                &upload.original_name,
                false,
                now,
            )
            .await?;
        }

        tracing::info!(product_id = id, new_images = uploads.len(), "Product updated");
        self.get_product(id).await
    }

    /// Delete a product: best-effort file removal, then row deletion
    /// (image rows go via FK cascade).
    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        let images = repository::product_image::find_by_product(&self.pool, id).await?;
        for image in &images {
            self.images.remove(&image.image_path);
        }
        repository::product::delete(&self.pool, id).await?;

        tracing::info!(product_id = id, images = images.len(), "Product deleted");
        Ok(())
    }

    /// Delete one image of a product.
    ///
    /// The file is only touched when a row of this product matched, so
    /// identical filenames on other products are never affected.
    pub async fn delete_image(&self, product_id: i64, image_path: &str) -> AppResult<()> {
        let removed =
            repository::product_image::delete_by_path(&self.pool, product_id, image_path).await?;
        if removed {
            self.images.remove(image_path);
        }
        Ok(())
    }

    /// Mark one image of a product as primary (single conditional statement;
    /// a path not belonging to the product leaves zero primaries).
    pub async fn set_primary_image(&self, product_id: i64, image_path: &str) -> AppResult<()> {
        repository::product_image::set_primary(&self.pool, product_id, image_path).await?;
        Ok(())
    }
}

/// Shape a product and its image rows into the public view.
///
/// Stable sort on "not primary": the primary image moves to the front,
/// everything else keeps insertion order.
fn assemble(product: Product, mut images: Vec<ProductImage>) -> ProductView {
    images.sort_by_key(|img| !img.is_primary);
    ProductView {
        id: product.id,
        category: product.category,
        name: product.name,
        code: product.code,
        description: product.description,
        images: images.into_iter().map(|img| img.image_path).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::io::Cursor;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    async fn test_catalog() -> (tempfile::TempDir, CatalogService) {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool().await;
        let catalog = CatalogService::new(pool, ImageStore::new(dir.path().to_path_buf()));
        (dir, catalog)
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn upload(name: &str) -> UploadedImage {
        UploadedImage {
            original_name: name.into(),
            data: png_bytes(),
        }
    }

    fn sample(category: &str, name: &str, code: &str) -> ProductCreate {
        ProductCreate {
            category: category.into(),
            name: name.into(),
            code: code.into(),
            description: "desc".into(),
        }
    }

    /// Seed a product and raw image rows without going through the store
    async fn seed_with_images(
        catalog: &CatalogService,
        code: &str,
        images: &[(&str, bool)],
    ) -> i64 {
        let product = repository::product::create(&catalog.pool, &sample("Solar", code, code), 0)
            .await
            .unwrap();
        for (path, primary) in images {
            repository::product_image::insert(&catalog.pool, product.id, path, path, *primary, 0)
                .await
                .unwrap();
        }
        product.id
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let (_dir, catalog) = test_catalog().await;
        let err = catalog.get_product(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_primary_image_sorts_first() {
        let (_dir, catalog) = test_catalog().await;
        // Primary inserted last; assembly must still move it to the front
        let id = seed_with_images(
            &catalog,
            "SP-1",
            &[("a.jpg", false), ("b.jpg", false), ("c.jpg", true)],
        )
        .await;

        let view = catalog.get_product(id).await.unwrap();
        assert_eq!(view.images, vec!["c.jpg", "a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn test_no_primary_keeps_insertion_order() {
        let (_dir, catalog) = test_catalog().await;
        let id = seed_with_images(&catalog, "SP-1", &[("a.jpg", false), ("b.jpg", false)]).await;

        let view = catalog.get_product(id).await.unwrap();
        assert_eq!(view.images, vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn test_set_primary_reorders() {
        let (_dir, catalog) = test_catalog().await;
        let id = seed_with_images(&catalog, "X1", &[("a.jpg", true), ("b.jpg", false)]).await;

        let view = catalog.get_product(id).await.unwrap();
        assert_eq!(view.images, vec!["a.jpg", "b.jpg"]);

        catalog.set_primary_image(id, "b.jpg").await.unwrap();
        let view = catalog.get_product(id).await.unwrap();
        assert_eq!(view.images, vec!["b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_list_products_grouping_and_empty_galleries() {
        let (_dir, catalog) = test_catalog().await;
        let with_images = seed_with_images(&catalog, "A-1", &[("a.jpg", true)]).await;
        let without_images = seed_with_images(&catalog, "B-1", &[]).await;

        let views = catalog.list_products().await.unwrap();
        assert_eq!(views.len(), 2);

        let a = views.iter().find(|v| v.id == with_images).unwrap();
        assert_eq!(a.images, vec!["a.jpg"]);
        let b = views.iter().find(|v| v.id == without_images).unwrap();
        assert!(b.images.is_empty());
    }

    #[tokio::test]
    async fn test_create_product_first_upload_is_primary() {
        let (dir, catalog) = test_catalog().await;
        let view = catalog
            .create_product(
                sample("Solar", "Panel", "SP-1"),
                vec![upload("front.png"), upload("back.png")],
            )
            .await
            .unwrap();

        assert_eq!(view.images.len(), 2);
        // Both files landed on disk
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);

        let rows = repository::product_image::find_by_product(&catalog.pool, view.id)
            .await
            .unwrap();
        assert_eq!(rows.iter().filter(|r| r.is_primary).count(), 1);
        let primary = rows.iter().find(|r| r.is_primary).unwrap();
        assert_eq!(primary.original_name, "front.png");
        // The view leads with the primary image
        assert_eq!(view.images[0], primary.image_path);
    }

    #[tokio::test]
    async fn test_create_product_conflict_writes_nothing() {
        let (dir, catalog) = test_catalog().await;
        catalog
            .create_product(sample("Solar", "Panel", "SP-1"), vec![upload("a.png")])
            .await
            .unwrap();

        let err = catalog
            .create_product(sample("Wind", "Turbine", "SP-1"), vec![upload("b.png")])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // The conflicting request stored neither rows nor files
        assert_eq!(catalog.list_products().await.unwrap().len(), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_update_appends_non_primary() {
        let (_dir, catalog) = test_catalog().await;
        let created = catalog
            .create_product(sample("Solar", "Panel", "SP-1"), vec![upload("front.png")])
            .await
            .unwrap();

        let changed = ProductUpdate {
            category: "Solar".into(),
            name: "Panel v2".into(),
            code: "SP-1".into(),
            description: "better".into(),
        };
        let view = catalog
            .update_product(created.id, changed, vec![upload("extra.png")])
            .await
            .unwrap();

        assert_eq!(view.name, "Panel v2");
        assert_eq!(view.images.len(), 2);
        // Primary unchanged: still the original first upload
        assert_eq!(view.images[0], created.images[0]);
    }

    #[tokio::test]
    async fn test_delete_product_spares_other_products_files() {
        let (dir, catalog) = test_catalog().await;
        let first = catalog
            .create_product(sample("Solar", "Panel", "SP-1"), vec![upload("a.png")])
            .await
            .unwrap();
        let second = catalog
            .create_product(sample("Wind", "Turbine", "WT-1"), vec![upload("a.png")])
            .await
            .unwrap();

        catalog.delete_product(first.id).await.unwrap();

        let views = catalog.list_products().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, second.id);
        // Second product's file untouched
        assert!(dir.path().join(&second.images[0]).exists());
        assert!(!dir.path().join(&first.images[0]).exists());
        // And its image rows survive
        let rows = repository::product_image::find_by_product(&catalog.pool, second.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_image_scoped_to_product() {
        let (dir, catalog) = test_catalog().await;
        let first = catalog
            .create_product(sample("Solar", "Panel", "SP-1"), vec![upload("a.png")])
            .await
            .unwrap();
        let second = catalog
            .create_product(sample("Wind", "Turbine", "WT-1"), vec![upload("a.png")])
            .await
            .unwrap();

        // Deleting first's path against the second product removes nothing
        catalog.delete_image(second.id, &first.images[0]).await.unwrap();
        assert!(dir.path().join(&first.images[0]).exists());
        assert_eq!(catalog.get_product(second.id).await.unwrap().images.len(), 1);

        catalog.delete_image(first.id, &first.images[0]).await.unwrap();
        assert!(!dir.path().join(&first.images[0]).exists());
        assert!(catalog.get_product(first.id).await.unwrap().images.is_empty());
    }

    #[tokio::test]
    async fn test_categories() {
        let (_dir, catalog) = test_catalog().await;
        seed_with_images(&catalog, "W-1", &[]).await;
        let id = seed_with_images(&catalog, "S-1", &[]).await;
        // Make the categories differ
        let changed = ProductUpdate {
            category: "Wind".into(),
            name: "W-1".into(),
            code: "W-1b".into(),
            description: "desc".into(),
        };
        catalog.update_product(id, changed, vec![]).await.unwrap();

        let categories = catalog.list_categories().await.unwrap();
        assert_eq!(categories, vec!["Solar".to_string(), "Wind".to_string()]);
    }
}
