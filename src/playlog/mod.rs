pub mod loader;
pub mod models;

#[cfg(test)]
pub mod fixtures;
