pub mod cookies;
pub mod format;
pub mod navigation;
pub mod validation;
