pub mod reader;
pub mod loader;

pub use reader::{parse_direction, read_jobs, read_reactions};
pub use loader::{DataPaths, Dataset, DatasetLoader, DEFAULT_DATA_DIR, JOBS_FILE, REACTIONS_FILE};
