pub mod github;
pub mod person;
