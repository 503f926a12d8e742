pub mod asset;
pub mod background;
pub mod configuration;

pub use asset::AssetRef;
pub use background::{Background, BackgroundPreset};
pub use configuration::Configuration;
