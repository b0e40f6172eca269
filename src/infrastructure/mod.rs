//! Infrastructure layer: storage, hashing and runtime concerns

pub mod complaint;
pub mod courier;
pub mod logging;
pub mod password;
pub mod product;
pub mod recovery;
pub mod review;
pub mod services;
pub mod user;
