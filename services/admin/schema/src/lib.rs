//! sea-orm entities owned by the admin service.

pub mod billboards;
pub mod categories;
pub mod colors;
pub mod images;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sizes;
pub mod stores;
