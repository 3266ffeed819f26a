//! Resource module
//!
//! Materials, textures, the asset cache and the loader seam through which
//! decoded scenes enter the viewer.

mod asset_cache;
mod loader;
pub mod texture;
pub mod material;

pub use asset_cache::AssetCache;
pub use loader::SceneLoader;
pub use texture::{Texture, TextureSource, ColorSpace};
pub use material::{Material, MaterialChanges};
