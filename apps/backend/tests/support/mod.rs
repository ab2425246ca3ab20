#![allow(dead_code)]

pub mod app_builder;
pub mod oracle;
pub mod recorder;
pub mod websocket;
