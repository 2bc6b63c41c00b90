pub mod links;

pub use links::{cars_for_pack, packs_for_car, packs_using_cell_model};
