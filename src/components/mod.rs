pub mod auth;
pub mod dashboard;
pub mod design_system;
pub mod landing;
