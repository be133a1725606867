use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Failed to write config file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the fetch workflow, one variant per category.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid compressor version '{0}'")]
    InvalidVersion(String),

    #[error("Failed to download {url}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid download URL {url}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Download of {url} was interrupted")]
    DownloadInterrupted {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract {}", archive.display())]
    Extract {
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Extracting {} did not produce {}", archive.display(), expected.display())]
    ExtractedDirMissing { archive: PathBuf, expected: PathBuf },

    #[error("Filesystem operation failed on {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FetchError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
