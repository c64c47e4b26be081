pub mod common;
pub mod error;
pub mod guard;
pub mod layout;
pub mod modal;
pub mod profile_details;
pub mod profile_edit;
pub mod sidebar;
pub mod toast;
