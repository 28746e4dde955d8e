pub mod demo;
pub mod dispatch;
pub mod interactive;
