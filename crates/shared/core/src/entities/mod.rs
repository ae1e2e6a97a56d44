mod action;
mod holding;
mod product;

pub use action::Action;
pub use holding::Holding;
pub use product::{MAX_PRICE, MIN_PRICE, Product, ProductId, ProductSpec};
