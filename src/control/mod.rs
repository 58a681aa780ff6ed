pub mod catalog;
pub mod driver;
pub mod primary_body;
