pub mod affordance;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod in_flight;
pub mod message;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod validation;

pub use app::{App, AuthContext};
