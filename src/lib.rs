pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod responses;
pub mod router;
pub mod templates;
pub mod validation;

#[cfg(test)]
mod tests;
