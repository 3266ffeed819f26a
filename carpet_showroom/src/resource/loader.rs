/// Loader seam for decoded scene graphs.
///
/// Parsing GLB/glTF files is outside this crate. Callers plug in a loader
/// that turns an asset reference into a `SceneGraph`; the viewer caches the
/// result in an `AssetCache` and adapts a private copy of it.

use crate::error::Result;
use crate::scene::SceneGraph;

/// Produces scene graphs from asset references
pub trait SceneLoader {
    /// Load and decode the scene referenced by `reference`.
    ///
    /// # Errors
    ///
    /// Implementations return `Error::AssetLoad` when the asset cannot be
    /// fetched or decoded.
    fn load_scene(&mut self, reference: &str) -> Result<SceneGraph>;
}

impl<F> SceneLoader for F
where
    F: FnMut(&str) -> Result<SceneGraph>,
{
    fn load_scene(&mut self, reference: &str) -> Result<SceneGraph> {
        self(reference)
    }
}
