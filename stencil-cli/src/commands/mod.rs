pub mod files;
pub mod input;
pub mod template;
