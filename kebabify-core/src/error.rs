use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the rename engine.
///
/// Directory reads, file writes and renames are fatal for a run; the map
/// builder swallows per-file read failures itself and never returns
/// [`KebabifyError::ReadFile`].
#[derive(Debug, Error)]
pub enum KebabifyError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename {} to {}: destination already exists", from.display(), to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid exclude pattern: {0}")]
    Glob(#[from] globset::Error),
}

pub type Result<T, E = KebabifyError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_names_both_paths() {
        let err = KebabifyError::RenameCollision {
            from: PathBuf::from("ui/Button.vue"),
            to: PathBuf::from("ui/button.vue"),
        };
        let message = err.to_string();
        assert!(message.contains("ui/Button.vue"));
        assert!(message.contains("ui/button.vue"));
        assert!(message.contains("already exists"));
    }

    #[test]
    fn test_io_source_is_preserved() {
        let err = KebabifyError::ReadDir {
            path: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");
    }
}
