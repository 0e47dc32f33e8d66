//! Zone Traffic Library
//!
//! A zone-based traffic signal model that can run headless or be embedded
//! by an external renderer.

pub mod city;
