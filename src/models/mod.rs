pub mod action;
pub mod activity;
pub mod effect;
pub mod status;
