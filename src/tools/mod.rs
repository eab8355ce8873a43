pub mod batch;
pub mod extract;
pub mod fetch;
pub mod page;
pub mod render;
