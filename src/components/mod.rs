pub mod footer;
pub mod header;
pub mod legal_modal;
