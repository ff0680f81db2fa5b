use sea_orm_migration::prelude::*;

mod m20260301_000001_create_stores;
mod m20260301_000002_create_billboards;
mod m20260301_000003_create_categories;
mod m20260301_000004_create_sizes;
mod m20260301_000005_create_colors;
mod m20260301_000006_create_products;
mod m20260301_000007_create_images;
mod m20260301_000008_create_orders;
mod m20260301_000009_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_stores::Migration),
            Box::new(m20260301_000002_create_billboards::Migration),
            Box::new(m20260301_000003_create_categories::Migration),
            Box::new(m20260301_000004_create_sizes::Migration),
            Box::new(m20260301_000005_create_colors::Migration),
            Box::new(m20260301_000006_create_products::Migration),
            Box::new(m20260301_000007_create_images::Migration),
            Box::new(m20260301_000008_create_orders::Migration),
            Box::new(m20260301_000009_create_order_items::Migration),
        ]
    }
}
