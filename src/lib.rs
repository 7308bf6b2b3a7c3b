#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset;
pub mod config;
pub mod helpers;
pub mod references;
pub mod tag;

pub use asset::{Asset, AssetError};
pub use config::{AssetConfig, Host};
pub use helpers::AssetTagHelper;
pub use tag::Tag;
