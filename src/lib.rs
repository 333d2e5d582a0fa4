pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod random;
pub mod render;
pub mod svg;
pub mod theme;

pub use builder::SvgBuilder;
pub use config::Config;
pub use data::{Contributions, Languages, Stats};
pub use error::RenderError;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
