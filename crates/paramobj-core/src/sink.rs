//! Output sinks for generated units.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Destination for generated type definitions.
///
/// The engine only guarantees the structural content of what it writes; how
/// and where units are persisted is the sink's concern. A sink is free to
/// reject a write (storage errors, its own collision rules); the processor
/// treats that as a per-signature recoverable failure.
pub trait Sink {
    fn write(&mut self, package: &str, name: &str, source: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, package: &str, name: &str, source: &str) -> io::Result<()> {
        (**self).write(package, name, source)
    }
}

/// Writes each unit to `<root>/<package segments>/<Name>.rs`.
///
/// Package segments may be separated by `::` or `.`; both map to
/// directories. Two units resolving to the same identifier silently
/// overwrite each other, matching the engine's documented lack of collision
/// detection.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn unit_path(&self, package: &str, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package.replace("::", ".").split('.') {
            if !segment.is_empty() {
                path.push(segment);
            }
        }
        path.push(format!("{name}.rs"));
        path
    }
}

impl Sink for FsSink {
    fn write(&mut self, package: &str, name: &str, source: &str) -> io::Result<()> {
        let path = self.unit_path(package, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, source)
    }
}

/// A generated unit captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    pub name: String,
    pub source: String,
}

/// Collects units in memory, in write order. Test support and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<GeneratedUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[GeneratedUnit] {
        &self.units
    }
}

impl Sink for MemorySink {
    fn write(&mut self, package: &str, name: &str, source: &str) -> io::Result<()> {
        self.units.push(GeneratedUnit {
            package: package.to_string(),
            name: name.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }
}
