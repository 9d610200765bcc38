pub mod toml_loader;

pub use toml_loader::{load_complexes_from_toml, resolve_complexes};
