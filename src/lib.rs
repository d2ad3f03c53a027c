pub mod bindings;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod dom;
pub mod profile;
pub mod render;
pub mod state;
pub mod store;

// Decorative effects (never touch view state)
pub mod effects;
