use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use ecom_admin::domain::types::ProductFilter;
use ecom_admin::error::AdminServiceError;
use ecom_admin::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductInput, UpdateProductUseCase,
};

use crate::helpers::{
    Catalog, MockDb, owner_id, seed_catalog, seed_product, seed_store, stranger_id,
};

fn input(catalog: &Catalog, price: &str, images: &[&str]) -> ProductInput {
    ProductInput {
        name: "Linen Shirt".into(),
        price: Decimal::from_str(price).unwrap(),
        category_id: catalog.category.id,
        size_id: catalog.size.id,
        color_id: catalog.color.id,
        images: images.iter().map(|s| s.to_string()).collect(),
        is_featured: true,
        is_archived: false,
    }
}

fn create(db: &MockDb) -> CreateProductUseCase<MockDb, MockDb, MockDb, MockDb, MockDb> {
    CreateProductUseCase {
        stores: db.clone(),
        products: db.clone(),
        categories: db.clone(),
        sizes: db.clone(),
        colors: db.clone(),
    }
}

fn update(db: &MockDb) -> UpdateProductUseCase<MockDb, MockDb, MockDb, MockDb, MockDb> {
    UpdateProductUseCase {
        stores: db.clone(),
        products: db.clone(),
        categories: db.clone(),
        sizes: db.clone(),
        colors: db.clone(),
    }
}

#[tokio::test]
async fn should_create_product_with_images_and_references() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());

    let detail = create(&db)
        .execute(
            owner_id(),
            catalog.store.id,
            input(
                &catalog,
                "49.9",
                &["https://cdn.example/front.png", "https://cdn.example/back.png"],
            ),
        )
        .await
        .unwrap();

    assert_eq!(detail.product.store_id, catalog.store.id);
    assert_eq!(detail.product.price.to_string(), "49.90");
    assert_eq!(detail.images.len(), 2);
    assert_eq!(detail.category.unwrap().id, catalog.category.id);
    assert_eq!(detail.size.unwrap().id, catalog.size.id);
    assert_eq!(detail.color.unwrap().id, catalog.color.id);
    assert_eq!(db.with(|t| (t.products.len(), t.images.len())), (1, 2));
}

#[tokio::test]
async fn should_report_every_reference_outside_the_store() {
    let db = MockDb::new();
    let mine = seed_store(&db, owner_id(), "Mine");
    let foreign = seed_catalog(&db, stranger_id());

    let err = create(&db)
        .execute(
            owner_id(),
            mine.id,
            input(&foreign, "10", &["https://cdn.example/a.png"]),
        )
        .await
        .unwrap_err();

    match err {
        AdminServiceError::Validation(errors) => {
            assert!(errors.has("categoryId"));
            assert!(errors.has("sizeId"));
            assert!(errors.has("colorId"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(db.with(|t| t.products.is_empty()));
}

#[tokio::test]
async fn should_reject_product_without_images() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());

    let err = create(&db)
        .execute(owner_id(), catalog.store.id, input(&catalog, "10", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::Validation(ref e) if e.has("images")));
}

#[tokio::test]
async fn should_forbid_creating_product_in_foreign_store() {
    let db = MockDb::new();
    let theirs = seed_catalog(&db, stranger_id());

    let err = create(&db)
        .execute(
            owner_id(),
            theirs.store.id,
            input(&theirs, "10", &["https://cdn.example/a.png"]),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::Forbidden));
}

#[tokio::test]
async fn should_replace_image_set_on_update() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let created = create(&db)
        .execute(
            owner_id(),
            catalog.store.id,
            input(
                &catalog,
                "20",
                &["https://cdn.example/1.png", "https://cdn.example/2.png"],
            ),
        )
        .await
        .unwrap();

    let mut changes = input(&catalog, "25.50", &["https://cdn.example/3.webp"]);
    changes.is_archived = true;
    let updated = update(&db)
        .execute(owner_id(), catalog.store.id, created.product.id, changes)
        .await
        .unwrap();

    assert_eq!(updated.product.price.to_string(), "25.50");
    assert!(updated.product.is_archived);
    assert_eq!(updated.product.created_at, created.product.created_at);
    let urls: Vec<String> = db.with(|t| t.images.iter().map(|i| i.url.clone()).collect());
    assert_eq!(urls, vec!["https://cdn.example/3.webp".to_string()]);
}

#[tokio::test]
async fn should_report_missing_product_on_update() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());

    let err = update(&db)
        .execute(
            owner_id(),
            catalog.store.id,
            Uuid::now_v7(),
            input(&catalog, "10", &["https://cdn.example/a.png"]),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::ProductNotFound));
}

#[tokio::test]
async fn should_list_public_products_without_archived() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let visible = seed_product(&db, &catalog, "Shirt", Decimal::new(1000, 2));
    let archived = seed_product(&db, &catalog, "Old shirt", Decimal::new(500, 2));
    db.with(|t| {
        if let Some(p) = t.products.iter_mut().find(|p| p.id == archived.id) {
            p.is_archived = true;
        }
    });
    let elsewhere = seed_catalog(&db, stranger_id());
    seed_product(&db, &elsewhere, "Not here", Decimal::new(100, 2));

    let listed = ListProductsUseCase {
        products: db.clone(),
    }
    .execute(catalog.store.id, ProductFilter::default())
    .await
    .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product.id, visible.id);
}

#[tokio::test]
async fn should_filter_featured_products() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let featured = seed_product(&db, &catalog, "Hero", Decimal::new(1000, 2));
    seed_product(&db, &catalog, "Plain", Decimal::new(1000, 2));
    db.with(|t| {
        if let Some(p) = t.products.iter_mut().find(|p| p.id == featured.id) {
            p.is_featured = true;
        }
    });

    let listed = ListProductsUseCase {
        products: db.clone(),
    }
    .execute(
        catalog.store.id,
        ProductFilter {
            featured_only: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product.name, "Hero");
}

#[tokio::test]
async fn should_get_archived_product_by_id() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let product = seed_product(&db, &catalog, "Old shirt", Decimal::new(500, 2));
    db.with(|t| t.products[0].is_archived = true);

    let found = GetProductUseCase {
        products: db.clone(),
    }
    .execute(catalog.store.id, product.id)
    .await
    .unwrap();

    assert!(found.product.is_archived);
}

#[tokio::test]
async fn should_delete_product_with_images() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let created = create(&db)
        .execute(
            owner_id(),
            catalog.store.id,
            input(&catalog, "20", &["https://cdn.example/1.png"]),
        )
        .await
        .unwrap();

    let deleted = DeleteProductUseCase {
        stores: db.clone(),
        products: db.clone(),
    }
    .execute(owner_id(), catalog.store.id, created.product.id)
    .await
    .unwrap();

    assert_eq!(deleted.images.len(), 1);
    assert_eq!(db.with(|t| (t.products.len(), t.images.len())), (0, 0));
}
