// src/core/mod.rs

pub mod net;
