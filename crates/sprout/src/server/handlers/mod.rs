pub mod pages;
pub mod records;
pub mod status;
