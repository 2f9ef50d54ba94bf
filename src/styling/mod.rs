pub use self::color_generator::ColorGenerator;
pub use self::plugin::{StylingPlugin, Theme};

mod color_generator;
mod dark_mode;
mod plugin;
