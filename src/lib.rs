pub mod animate;
pub mod app;
pub mod demo;
pub mod error;
pub mod graph;
pub mod statistics;
pub mod traversal;
