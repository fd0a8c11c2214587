//! Domain model: repository records, inventories and the small value types
//! that shape how they are matched and emitted

pub mod entities;
pub mod value_objects;
