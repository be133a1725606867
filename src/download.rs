use std::fs::{self, File};
use std::io::{Read, Write};
use std::net::IpAddr;
use std::path::Path;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("jstools/", env!("CARGO_PKG_VERSION"));

/// A proxy can't reach our own loopback, so those URLs always go direct.
fn is_loopback(url: &url::Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

/// Fetches `url` into `destination` with a single blocking GET.
///
/// The body is streamed to a `.part` file first so an interrupted download
/// never leaves something that looks like a cached archive.
pub fn download_file(url: &str, destination: &Path) -> Result<u64, FetchError> {
    let download_err = |source: reqwest::Error| FetchError::Download {
        url: url.to_string(),
        source,
    };

    let parsed = url::Url::parse(url).map_err(|e| FetchError::BadUrl {
        url: url.to_string(),
        source: e,
    })?;

    let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
    if is_loopback(&parsed) {
        builder = builder.no_proxy();
    }
    let client = builder.build().map_err(download_err)?;

    let mut response = client
        .get(parsed)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(download_err)?;

    let part = destination.with_extension("zip.part");
    let mut file = File::create(&part).map_err(|e| FetchError::fs(&part, e))?;

    let streamed = stream_body(url, &mut response, &mut file, &part);
    drop(file);
    let bytes = match streamed {
        Ok(n) => n,
        Err(err) => {
            let _ = fs::remove_file(&part);
            return Err(err);
        }
    };

    fs::rename(&part, destination).map_err(|e| FetchError::fs(destination, e))?;
    tracing::debug!("Saved {} bytes to {}", bytes, destination.display());

    Ok(bytes)
}

/// Read failures belong to the download, write failures to the local disk.
fn stream_body(
    url: &str,
    body: &mut impl Read,
    file: &mut File,
    part: &Path,
) -> Result<u64, FetchError> {
    let mut buf = vec![0u8; 64 * 1024];
    let mut total = 0u64;

    loop {
        let n = body.read(&mut buf).map_err(|source| FetchError::DownloadInterrupted {
            url: url.to_string(),
            source,
        })?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .map_err(|e| FetchError::fs(part, e))?;
        total += n as u64;
    }

    file.flush().map_err(|e| FetchError::fs(part, e))?;
    Ok(total)
}
