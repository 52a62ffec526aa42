pub mod config;
pub mod domain;
pub mod environment;
pub mod errors;
pub mod faq;
pub mod format;
pub mod logging;
pub mod translation;
pub mod u2f;
pub mod wallet;
