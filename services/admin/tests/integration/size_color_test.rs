use rust_decimal::Decimal;
use uuid::Uuid;

use ecom_admin::error::AdminServiceError;
use ecom_admin::usecase::color::{
    ColorInput, CreateColorUseCase, DeleteColorUseCase, GetColorUseCase, ListColorsUseCase,
    UpdateColorUseCase,
};
use ecom_admin::usecase::size::{
    CreateSizeUseCase, DeleteSizeUseCase, GetSizeUseCase, ListSizesUseCase, SizeInput,
    UpdateSizeUseCase,
};

use crate::helpers::{
    MockDb, owner_id, seed_catalog, seed_color, seed_product, seed_size, seed_store, stranger_id,
};

// ── Sizes ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_and_list_sizes_per_store() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");
    let other = seed_store(&db, stranger_id(), "Theirs");
    seed_size(&db, other.id);

    let size = CreateSizeUseCase {
        stores: db.clone(),
        sizes: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        SizeInput {
            name: "Large".into(),
            value: " L ".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(size.value, "L");

    let listed = ListSizesUseCase { sizes: db.clone() }
        .execute(store.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, size.id);
}

#[tokio::test]
async fn should_require_size_name_and_value() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let err = CreateSizeUseCase {
        stores: db.clone(),
        sizes: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        SizeInput {
            name: "".into(),
            value: "  ".into(),
        },
    )
    .await
    .unwrap_err();

    match err {
        AdminServiceError::Validation(errors) => {
            assert!(errors.has("name"));
            assert!(errors.has("value"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn should_forbid_size_changes_in_foreign_store() {
    let db = MockDb::new();
    let theirs = seed_store(&db, stranger_id(), "Theirs");
    let size = seed_size(&db, theirs.id);

    let err = UpdateSizeUseCase {
        stores: db.clone(),
        sizes: db.clone(),
    }
    .execute(
        owner_id(),
        theirs.id,
        size.id,
        SizeInput {
            name: "Tiny".into(),
            value: "XS".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AdminServiceError::Forbidden));

    let err = DeleteSizeUseCase {
        stores: db.clone(),
        sizes: db.clone(),
    }
    .execute(owner_id(), theirs.id, size.id)
    .await
    .unwrap_err();
    assert!(matches!(err, AdminServiceError::Forbidden));
    assert_eq!(db.with(|t| t.sizes.len()), 1);
}

#[tokio::test]
async fn should_refuse_deleting_size_in_use() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    seed_product(&db, &catalog, "Linen Shirt", Decimal::new(4990, 2));

    let err = DeleteSizeUseCase {
        stores: db.clone(),
        sizes: db.clone(),
    }
    .execute(owner_id(), catalog.store.id, catalog.size.id)
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::InUse("size")));
}

#[tokio::test]
async fn should_report_missing_size() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let err = GetSizeUseCase { sizes: db.clone() }
        .execute(store.id, Uuid::now_v7())
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::SizeNotFound));
}

// ── Colors ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_color_with_hex_value() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let color = CreateColorUseCase {
        stores: db.clone(),
        colors: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        ColorInput {
            name: "White".into(),
            value: "#fff".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(color.store_id, store.id);
    let found = GetColorUseCase { colors: db.clone() }
        .execute(store.id, color.id)
        .await
        .unwrap();
    assert_eq!(found.value, "#fff");
}

#[tokio::test]
async fn should_reject_non_hex_color() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let err = CreateColorUseCase {
        stores: db.clone(),
        colors: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        ColorInput {
            name: "White".into(),
            value: "white".into(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::Validation(ref e) if e.has("value")));
    assert!(db.with(|t| t.colors.is_empty()));
}

#[tokio::test]
async fn should_update_and_delete_color() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");
    let color = seed_color(&db, store.id);

    let updated = UpdateColorUseCase {
        stores: db.clone(),
        colors: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        color.id,
        ColorInput {
            name: "Black".into(),
            value: "#000000".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Black");

    let deleted = DeleteColorUseCase {
        stores: db.clone(),
        colors: db.clone(),
    }
    .execute(owner_id(), store.id, color.id)
    .await
    .unwrap();
    assert_eq!(deleted.value, "#000000");

    let listed = ListColorsUseCase { colors: db.clone() }
        .execute(store.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}
