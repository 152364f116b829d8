#![allow(dead_code)] // each test binary uses a different slice of the helpers

pub mod factories;
pub mod helpers;
