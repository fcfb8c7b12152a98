pub mod pagination;
pub mod services;
pub mod tracker;
pub mod utils;
