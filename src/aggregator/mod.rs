//! Scoped acquisition of the fixed text resource set.
//!
//! All seven resources are opened inside one scope; if any open fails the
//! already-acquired handles are released before the error propagates, so
//! acquisition is all-or-nothing. Only the first resource's content is
//! ever read.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// The fixed resource names, looked up in acquisition order.
pub const RESOURCE_NAMES: [&str; 7] = [
    "file_1.txt",
    "file_2.txt",
    "file_3.txt",
    "file_4.txt",
    "file_5.txt",
    "file_6.txt",
    "file_7.txt",
];

/// The one error this module can produce: a resource was missing or
/// unreadable at acquisition time.
#[derive(Debug, Error)]
#[error("failed to acquire resource '{name}': {source}")]
pub struct ResourceError {
    /// Name of the resource that failed.
    pub name: String,
    /// The underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// An open resource handle, valid only inside its acquisition scope.
#[derive(Debug)]
struct ResourceHandle {
    name: String,
    file: File,
}

/// The composite scoped guard over all seven handles.
///
/// Dropping the set closes every handle, last-acquired first.
#[derive(Debug)]
pub struct ResourceSet {
    handles: Vec<ResourceHandle>,
}

impl ResourceSet {
    /// Open all seven resources under `dir`.
    ///
    /// Fails on the first resource that cannot be opened; handles opened
    /// before the failure are released when the partial set is dropped.
    pub fn acquire(dir: &Path) -> Result<Self, ResourceError> {
        let mut handles = Vec::with_capacity(RESOURCE_NAMES.len());

        for name in RESOURCE_NAMES {
            let path = dir.join(name);
            let file = File::open(&path).map_err(|source| ResourceError {
                name: name.to_string(),
                source,
            })?;

            debug!("Acquired resource: {}", path.display());
            handles.push(ResourceHandle {
                name: name.to_string(),
                file,
            });
        }

        Ok(Self { handles })
    }

    /// Number of handles currently held.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the set holds no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Read the full content of the first resource into memory.
    ///
    /// The remaining six handles stay open but are never read.
    pub fn read_primary(&mut self) -> Result<String, ResourceError> {
        let primary = &mut self.handles[0];

        let mut content = String::new();
        primary
            .file
            .read_to_string(&mut content)
            .map_err(|source| ResourceError {
                name: primary.name.clone(),
                source,
            })?;

        debug!(
            "Read {} bytes from primary resource {}",
            content.len(),
            primary.name
        );
        Ok(content)
    }
}

impl Drop for ResourceSet {
    fn drop(&mut self) {
        // Release in reverse acquisition order.
        while let Some(handle) = self.handles.pop() {
            debug!("Releasing resource: {}", handle.name);
        }
    }
}

/// Acquire the seven resources under `dir` and read the first one.
///
/// Returns the primary resource's content; all handles are released before
/// this function returns, on both the success and the error path.
pub fn aggregate(dir: &Path) -> Result<String, ResourceError> {
    let mut set = ResourceSet::acquire(dir)?;
    info!("Acquired {} resources in {}", set.len(), dir.display());

    let content = set.read_primary()?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_resources(dir: &Path) {
        for (i, name) in RESOURCE_NAMES.iter().enumerate() {
            fs::write(dir.join(name), format!("content of resource {}", i + 1)).unwrap();
        }
    }

    #[test]
    fn test_acquire_all_seven() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());

        let set = ResourceSet::acquire(dir.path()).unwrap();
        assert_eq!(set.len(), 7);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_read_primary_only() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());

        let mut set = ResourceSet::acquire(dir.path()).unwrap();
        let content = set.read_primary().unwrap();
        assert_eq!(content, "content of resource 1");
        // All seven handles remain held until the set drops.
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_missing_resource_aborts_acquisition() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());
        fs::remove_file(dir.path().join("file_4.txt")).unwrap();

        let err = ResourceSet::acquire(dir.path()).unwrap_err();
        assert_eq!(err.name, "file_4.txt");
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_failed_acquisition_releases_earlier_handles() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());
        fs::remove_file(dir.path().join("file_7.txt")).unwrap();

        assert!(ResourceSet::acquire(dir.path()).is_err());

        // The six opened handles were dropped with the partial set; the
        // files can be removed, which would fail on leaked handles on
        // platforms with mandatory sharing rules.
        for name in &RESOURCE_NAMES[..6] {
            fs::remove_file(dir.path().join(name)).unwrap();
        }
    }

    #[test]
    fn test_aggregate_returns_primary_content() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());

        let content = aggregate(dir.path()).unwrap();
        assert_eq!(content, "content of resource 1");
    }

    #[test]
    fn test_aggregate_missing_file_propagates() {
        let dir = tempdir().unwrap();
        // No resources written at all.
        let err = aggregate(dir.path()).unwrap_err();
        assert_eq!(err.name, "file_1.txt");
    }
}
