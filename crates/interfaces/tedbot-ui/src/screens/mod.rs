pub mod actions;
pub mod login;
pub mod logs;
pub mod obs;
