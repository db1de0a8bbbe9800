pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod data_loading;
pub mod pages;

pub use app_state::*;
pub use components::*;
pub use data_loading::*;
