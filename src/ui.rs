pub mod bindings;
pub mod document;
pub mod errors;
pub mod loading;
pub mod navigation;
pub mod templates;
