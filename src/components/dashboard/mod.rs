//! Authenticated dashboard views.

pub mod invoices;
pub mod overview;
pub mod shell;
pub mod upload_modal;

pub use invoices::Invoices;
pub use overview::Overview;
