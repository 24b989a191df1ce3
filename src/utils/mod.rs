pub mod animation;
pub mod formatting;
pub mod observer;
pub mod scroll;
