mod assets;

pub use assets::{AssetCatalog, AssetManifest, AudioEntry, ImageEntry, MissingAssetError};
