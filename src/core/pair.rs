// pair.rs - Pairs, temporary names and the batch plan

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One source/destination association and the temporary name used to swap it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub temp: PathBuf,
}

impl Pair {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, suffix: &str) -> Self {
        let source = source.into();
        let temp = temp_name(&source, suffix);
        Self {
            source,
            destination: destination.into(),
            temp,
        }
    }

    /// The three renames that exchange this pair's names, in order
    pub fn steps(&self) -> [RenameStep<'_>; 3] {
        [
            RenameStep { from: &self.source, to: &self.temp },
            RenameStep { from: &self.destination, to: &self.source },
            RenameStep { from: &self.temp, to: &self.destination },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameStep<'a> {
    pub from: &'a Path,
    pub to: &'a Path,
}

impl<'a> RenameStep<'a> {
    /// The rename that undoes this one
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// `source` with `suffix` appended to its last component
pub fn temp_name(source: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// True when something, even a dangling symlink, occupies `path`
pub fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// All pairs of one invocation, sources first half, destinations second half
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwapPlan {
    pairs: Vec<Pair>,
}

impl SwapPlan {
    /// Zip `sources[i]` with `destinations[i]`; extra entries on either side are ignored
    pub fn new<S, D>(sources: &[S], destinations: &[D], suffix: &str) -> Self
    where
        S: AsRef<Path>,
        D: AsRef<Path>,
    {
        let pairs = sources
            .iter()
            .zip(destinations)
            .map(|(s, d)| Pair::new(s.as_ref(), d.as_ref(), suffix))
            .collect();
        Self { pairs }
    }

    /// Split a flat, even-length filename list at its midpoint
    pub fn from_filenames<F: AsRef<Path>>(filenames: &[F], suffix: &str) -> Self {
        let (sources, destinations) = filenames.split_at(filenames.len() / 2);
        Self::new(sources, destinations, suffix)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
