//! Shared UI primitives used across the landing page, auth pages, and
//! the dashboard.

pub mod button;
pub mod input;
pub mod modal;
pub mod select;
pub mod toast;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use modal::Modal;
pub use select::Select;
pub use toast::ToastHost;
