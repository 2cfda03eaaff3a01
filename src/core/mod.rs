pub mod add;
pub mod browser;
pub mod del;
pub mod edit;
pub mod log;
pub mod query;
