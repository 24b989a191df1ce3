pub mod calculator;
pub mod invoices;
pub mod session;
pub mod toast;
