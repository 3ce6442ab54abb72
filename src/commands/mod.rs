//! Command implementations for Luapack CLI

pub mod bundle;
pub mod completions;
pub mod version;
