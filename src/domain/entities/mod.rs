pub mod inventory;
pub mod repository;

pub use inventory::{Inventory, InventoryError};
pub use repository::Repository;
