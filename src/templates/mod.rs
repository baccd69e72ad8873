pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::base::base_layout;
