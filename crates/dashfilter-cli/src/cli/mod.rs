mod commands;
mod logging;
mod render;
mod setup;
mod styles;

pub use commands::run;
