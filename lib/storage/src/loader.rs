// Loading the reactions and jobs files from disk
use crate::reader::{read_jobs, read_reactions};
use likesim_core::{Error, Job, Reaction, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const REACTIONS_FILE: &str = "reactions.csv";
pub const JOBS_FILE: &str = "jobs.csv";

/// Locations of the two input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub reactions: PathBuf,
    pub jobs: PathBuf,
}

impl DataPaths {
    /// Standard file names inside `data_dir`
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            reactions: data_dir.join(REACTIONS_FILE),
            jobs: data_dir.join(JOBS_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

/// Fully parsed input
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub reactions: Vec<Reaction>,
    pub jobs: Vec<Job>,
}

/// Reads both sources; any failure aborts the whole load
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    paths: DataPaths,
}

impl DatasetLoader {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn load(&self) -> Result<Dataset> {
        let reactions = self.load_reactions()?;
        let jobs = self.load_jobs()?;
        Ok(Dataset { reactions, jobs })
    }

    pub fn load_reactions(&self) -> Result<Vec<Reaction>> {
        let path = &self.paths.reactions;
        let reactions = read_reactions(open(path)?, path)?;
        info!(path = %path.display(), rows = reactions.len(), "Loaded reactions");
        Ok(reactions)
    }

    pub fn load_jobs(&self) -> Result<Vec<Job>> {
        let path = &self.paths.jobs;
        let jobs = read_jobs(open(path)?, path)?;
        info!(path = %path.display(), rows = jobs.len(), "Loaded jobs");
        Ok(jobs)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::io(path, e))
}
