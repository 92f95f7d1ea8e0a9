//! Events Entity Module

pub mod event;
