//! Taskboard: a server-rendered task-list manager.
//!
//! This crate accepts HTTP requests, performs CRUD operations against a
//! single relational table of tasks, and renders HTML fragments reflecting
//! the updated list. Each request maps to exactly one SQL statement followed
//! by one template render.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Process configuration fixed at startup
//! - [`task`]: Task domain, storage port, adapters, and board service
//! - [`web`]: HTTP routing, request handlers, and template rendering

pub mod config;
pub mod task;
pub mod web;
