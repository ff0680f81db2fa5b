use rust_decimal::Decimal;
use uuid::Uuid;

use ecom_admin::error::AdminServiceError;
use ecom_admin::usecase::checkout::{CheckoutInput, CheckoutUseCase};
use ecom_admin::usecase::order::ListOrdersUseCase;

use crate::helpers::{MockDb, owner_id, seed_catalog, seed_product, stranger_id};

fn checkout(db: &MockDb) -> CheckoutUseCase<MockDb, MockDb, MockDb> {
    CheckoutUseCase {
        stores: db.clone(),
        products: db.clone(),
        orders: db.clone(),
    }
}

#[tokio::test]
async fn should_record_paid_order_with_one_item_per_id() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let shirt = seed_product(&db, &catalog, "Shirt", Decimal::new(1999, 2));
    let hat = seed_product(&db, &catalog, "Hat", Decimal::new(501, 2));

    let order = checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: vec![shirt.id, hat.id, shirt.id],
            },
        )
        .await
        .unwrap();

    assert!(order.order.is_paid);
    assert_eq!(order.order.store_id, catalog.store.id);
    assert_eq!(order.lines.len(), 3);
    assert_eq!(order.total(), Decimal::new(4499, 2));
    assert_eq!(order.summary(), "Shirt, Hat, Shirt");
    assert_eq!(db.with(|t| (t.orders.len(), t.order_items.len())), (1, 3));
}

#[tokio::test]
async fn should_require_product_ids() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());

    let err = checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: vec![],
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::Validation(ref e) if e.has("productIds")));
}

#[tokio::test]
async fn should_reject_unknown_store() {
    let db = MockDb::new();

    let err = checkout(&db)
        .execute(
            Uuid::now_v7(),
            CheckoutInput {
                product_ids: vec![Uuid::now_v7()],
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AdminServiceError::InvalidStore));
}

#[tokio::test]
async fn should_reject_archived_and_foreign_products() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let archived = seed_product(&db, &catalog, "Old", Decimal::new(100, 2));
    db.with(|t| t.products[0].is_archived = true);
    let elsewhere = seed_catalog(&db, stranger_id());
    let foreign = seed_product(&db, &elsewhere, "Theirs", Decimal::new(100, 2));

    let err = checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: vec![archived.id, foreign.id],
            },
        )
        .await
        .unwrap_err();

    match err {
        AdminServiceError::Validation(errors) => assert_eq!(errors.fields().len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(db.with(|t| t.orders.is_empty()));
}

#[tokio::test]
async fn should_report_unavailable_products_in_request_order() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let missing: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
    let mut requested = missing.clone();
    requested.push(missing[0]);
    requested.push(missing[3]);

    let err = checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: requested,
            },
        )
        .await
        .unwrap_err();

    let errors = match err {
        AdminServiceError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other:?}"),
    };
    let messages: Vec<String> = errors.fields().iter().map(|e| e.message.clone()).collect();
    let expected: Vec<String> = missing
        .iter()
        .map(|id| format!("product {id} is not available"))
        .collect();
    assert_eq!(messages, expected);
}

#[tokio::test]
async fn should_list_orders_for_owner_only() {
    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let shirt = seed_product(&db, &catalog, "Shirt", Decimal::new(1999, 2));
    checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: vec![shirt.id],
            },
        )
        .await
        .unwrap();
    let usecase = ListOrdersUseCase {
        stores: db.clone(),
        orders: db.clone(),
    };

    let orders = usecase.execute(owner_id(), catalog.store.id).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].summary(), "Shirt");

    let err = usecase
        .execute(stranger_id(), catalog.store.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AdminServiceError::Forbidden));
}

#[tokio::test]
async fn should_refuse_deleting_ordered_product() {
    use ecom_admin::usecase::product::DeleteProductUseCase;

    let db = MockDb::new();
    let catalog = seed_catalog(&db, owner_id());
    let shirt = seed_product(&db, &catalog, "Shirt", Decimal::new(1999, 2));
    checkout(&db)
        .execute(
            catalog.store.id,
            CheckoutInput {
                product_ids: vec![shirt.id],
            },
        )
        .await
        .unwrap();

    let err = DeleteProductUseCase {
        stores: db.clone(),
        products: db.clone(),
    }
    .execute(owner_id(), catalog.store.id, shirt.id)
    .await
    .unwrap_err();

    assert!(matches!(err, AdminServiceError::InUse("product")));
}
