//! Trip Planner - AI-assisted travel planning web front end
//!
//! This crate turns trip parameters submitted through HTML forms into prompts
//! for a generative-language model and renders the model's markdown replies
//! as HTML pages.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
