//! Route-level pages of the student portal.

pub mod chat;
pub mod home;
pub mod profile;
pub mod quiz;
pub mod search;
pub mod simulator;
pub mod topic;
pub mod unit;
