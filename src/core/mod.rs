pub mod config;
pub mod equipment;
pub mod locale;
pub mod naming;
pub mod persistence;
pub mod port;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
