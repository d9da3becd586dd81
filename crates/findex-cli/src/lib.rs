//! Library components of the Findex Explorer CLI.

pub mod logging;
pub mod output;
pub mod render;
