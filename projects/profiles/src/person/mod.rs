pub mod birthday;
pub mod models;
