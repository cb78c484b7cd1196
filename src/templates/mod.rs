pub mod foods;

pub use foods::FOODS_TEMPLATE;
