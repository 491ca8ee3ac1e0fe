// src/server/handlers/mod.rs
//! HTTP request handlers for the pantry server

pub mod recipes;
