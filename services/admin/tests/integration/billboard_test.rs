use uuid::Uuid;

use ecom_admin::error::AdminServiceError;
use ecom_admin::usecase::billboard::{
    BillboardInput, CreateBillboardUseCase, DeleteBillboardUseCase, GetBillboardUseCase,
    ListBillboardsUseCase, UpdateBillboardUseCase,
};

use crate::helpers::{
    IMAGE_URL, MockDb, owner_id, seed_billboard, seed_category, seed_store, stranger_id,
};

fn input(label: &str, image_url: &str) -> BillboardInput {
    BillboardInput {
        label: label.into(),
        image_url: image_url.into(),
    }
}

fn create(db: &MockDb) -> CreateBillboardUseCase<MockDb, MockDb> {
    CreateBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
}

#[tokio::test]
async fn should_create_billboard_in_path_store() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let billboard = create(&db)
        .execute(owner_id(), store.id, input("Summer sale", IMAGE_URL))
        .await
        .unwrap();

    assert_eq!(billboard.store_id, store.id);
    assert_eq!(billboard.label, "Summer sale");
    let stored = db.with(|t| t.billboards.clone());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, billboard.id);
}

#[tokio::test]
async fn should_reject_invalid_billboard_before_touching_store() {
    let db = MockDb::new();

    // No store exists: validation must still win over authorization.
    let err = create(&db)
        .execute(owner_id(), Uuid::now_v7(), input("", "https://cdn.example/a.txt"))
        .await
        .unwrap_err();

    match err {
        AdminServiceError::Validation(errors) => {
            assert!(errors.has("label"));
            assert!(errors.has("imageUrl"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn should_forbid_creating_in_foreign_store() {
    let db = MockDb::new();
    let theirs = seed_store(&db, stranger_id(), "Theirs");

    let err = create(&db)
        .execute(owner_id(), theirs.id, input("Sneaky", IMAGE_URL))
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::Forbidden));
    assert!(db.with(|t| t.billboards.is_empty()));
}

#[tokio::test]
async fn should_list_only_rows_of_the_store() {
    let db = MockDb::new();
    let mine = seed_store(&db, owner_id(), "Mine");
    let theirs = seed_store(&db, stranger_id(), "Theirs");
    seed_billboard(&db, mine.id);
    seed_billboard(&db, mine.id);
    seed_billboard(&db, theirs.id);

    let listed = ListBillboardsUseCase {
        billboards: db.clone(),
    }
    .execute(mine.id)
    .await
    .unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|b| b.store_id == mine.id));
}

#[tokio::test]
async fn should_not_find_billboard_through_another_store() {
    let db = MockDb::new();
    let mine = seed_store(&db, owner_id(), "Mine");
    let theirs = seed_store(&db, stranger_id(), "Theirs");
    let billboard = seed_billboard(&db, theirs.id);
    let usecase = GetBillboardUseCase {
        billboards: db.clone(),
    };

    let err = usecase.execute(mine.id, billboard.id).await.unwrap_err();
    assert!(matches!(err, AdminServiceError::BillboardNotFound));

    let found = usecase.execute(theirs.id, billboard.id).await.unwrap();
    assert_eq!(found.id, billboard.id);
}

#[tokio::test]
async fn should_update_billboard() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");
    let billboard = seed_billboard(&db, store.id);

    let updated = UpdateBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
    .execute(
        owner_id(),
        store.id,
        billboard.id,
        input("Winter sale", "https://cdn.example/winter.webp"),
    )
    .await
    .unwrap();

    assert_eq!(updated.label, "Winter sale");
    assert_eq!(updated.created_at, billboard.created_at);
    assert_eq!(
        db.with(|t| t.billboards[0].image_url.clone()),
        "https://cdn.example/winter.webp"
    );
}

#[tokio::test]
async fn should_forbid_updating_in_foreign_store() {
    let db = MockDb::new();
    let theirs = seed_store(&db, stranger_id(), "Theirs");
    let billboard = seed_billboard(&db, theirs.id);

    let err = UpdateBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
    .execute(owner_id(), theirs.id, billboard.id, input("Mine now", IMAGE_URL))
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::Forbidden));
}

#[tokio::test]
async fn should_delete_and_return_billboard() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");
    let billboard = seed_billboard(&db, store.id);

    let deleted = DeleteBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
    .execute(owner_id(), store.id, billboard.id)
    .await
    .unwrap();

    assert_eq!(deleted.id, billboard.id);
    assert!(db.with(|t| t.billboards.is_empty()));
}

#[tokio::test]
async fn should_refuse_deleting_billboard_in_use() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");
    let billboard = seed_billboard(&db, store.id);
    seed_category(&db, store.id, billboard.id);

    let err = DeleteBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
    .execute(owner_id(), store.id, billboard.id)
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::InUse("billboard")));
    assert_eq!(db.with(|t| t.billboards.len()), 1);
}

#[tokio::test]
async fn should_report_missing_billboard_on_delete() {
    let db = MockDb::new();
    let store = seed_store(&db, owner_id(), "Corner Shop");

    let err = DeleteBillboardUseCase {
        stores: db.clone(),
        billboards: db.clone(),
    }
    .execute(owner_id(), store.id, Uuid::now_v7())
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::BillboardNotFound));
}
