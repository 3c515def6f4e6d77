//! Request handlers

pub mod health;
pub mod knowledge;
pub mod practice;
pub mod speech;
pub mod story;
