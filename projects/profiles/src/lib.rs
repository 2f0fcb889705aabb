//! Profile helpers service
//! 
//! - GitHub follower count lookup in `endpoints/github/followers/`
//! - Birthday greeting in `person/`, exposed by `endpoints/person/greet/`
//! - Environment configuration in `config`

pub mod config;
pub mod endpoints;
pub mod person;
pub mod router;
