pub mod files;
pub mod pages;
pub mod site;
