//! Squill script templates.
//!
//! Renders a resolved expression as a snippet of the remote engine's
//! scripting language, for the cases where evaluation must happen
//! inside the engine rather than locally. A [`ScriptTemplate`] pairs
//! the snippet (with `{}` holes) with its ordered parameter bindings
//! and the result type; templates are built fresh per compilation and
//! never cached.

mod config;
mod errors;
mod format;
mod params;
mod template;

pub use config::ScriptConfig;
pub use errors::ScriptError;
pub use format::script_for;
pub use params::{params_builder, Param, Params, ParamsBuilder};
pub use template::ScriptTemplate;
