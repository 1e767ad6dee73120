pub mod config;
pub mod pipeline;
pub mod replies;
pub mod startup;
pub mod state;
