//! Main module for gemtext library functionality

pub mod config;
pub mod encoding;
pub mod formats;
pub mod lexing;
pub mod parser;
pub mod token;
