pub mod case_type;
pub mod complex;
pub mod loaders;
pub mod request;

pub use case_type::CaseType;
pub use complex::{builtin_complexes, find_complex, CourtComplex};
pub use loaders::{load_complexes_from_toml, resolve_complexes};
pub use request::{ScrapeFiles, ScrapeRequest, ScrapeResult};
