//! Command implementations for Portacode CLI

pub mod check_workdir;
pub mod completions;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod set_executable;
pub mod show;
pub mod validate;
pub mod version;
