use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::result::ZipResult;
use zip::ZipArchive;

use crate::error::FetchError;
use crate::workdir::WorkingDir;

/// Unpacks `archive_path` into `destination`, working from inside it.
/// Returns the number of entries written.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<usize, FetchError> {
    let extract_err = |source: zip::result::ZipError| FetchError::Extract {
        archive: archive_path.to_path_buf(),
        source,
    };

    let file = File::open(archive_path).map_err(|e| extract_err(e.into()))?;
    let mut archive = ZipArchive::new(file).map_err(extract_err)?;

    let cwd = WorkingDir::enter(destination).map_err(|e| FetchError::fs(destination, e))?;
    tracing::debug!(
        "Unpacking {} in {} (from {})",
        archive_path.display(),
        destination.display(),
        cwd.previous().display()
    );
    unpack_here(&mut archive).map_err(extract_err)
}

fn unpack_here(archive: &mut ZipArchive<File>) -> ZipResult<usize> {
    let mut written = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(outpath) = entry.enclosed_name() else {
            tracing::warn!("Skipping unsafe archive entry {}", entry.name());
            continue;
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }

        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_release_zip;
    use std::env;
    use std::sync::PoisonError;
    use tempfile::TempDir;

    use crate::workdir::CWD_LOCK;

    #[test]
    fn unpacks_into_destination() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("yuicompressor-2.4.2.zip");
        write_release_zip(&archive, "yuicompressor-2.4.2");

        let dest = tmp.path().join("lib");
        fs::create_dir(&dest).unwrap();
        let n = extract_zip(&archive, &dest).unwrap();

        assert_eq!(n, 3);
        let jar = dest.join("yuicompressor-2.4.2/build/yuicompressor-2.4.2.jar");
        assert_eq!(fs::read_to_string(jar).unwrap(), "jar bytes");
    }

    #[test]
    fn corrupt_archive_is_an_extract_error_and_cwd_is_restored() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("yuicompressor-2.4.2.zip");
        fs::write(&archive, b"<html>404 Not Found</html>").unwrap();

        let before = {
            let _lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            env::current_dir().unwrap()
        };

        let err = extract_zip(&archive, tmp.path()).unwrap_err();
        assert!(matches!(err, FetchError::Extract { .. }), "{err:?}");

        let _lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn missing_archive_is_an_extract_error() {
        let tmp = TempDir::new().unwrap();
        let err = extract_zip(&tmp.path().join("absent.zip"), tmp.path()).unwrap_err();
        assert!(matches!(err, FetchError::Extract { .. }), "{err:?}");
    }
}
