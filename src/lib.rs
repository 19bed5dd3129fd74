//! Server-rendered explorer for the Global Trend API: GitHub users and
//! repositories, posts and users, with drill-down navigation.
//!
//! The library holds the whole UI model so it can be driven without a browser;
//! the binary only hosts it over HTTP.

pub mod app;
pub mod controllers;
pub mod error;
pub mod html;
pub mod mappers;
pub mod models;
pub mod services;
pub mod ui;
pub mod validators;
pub mod viewers;
pub mod views;
