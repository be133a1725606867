use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const JAR_BYTES: &[u8] = b"jar bytes";

/// Writes a zip shaped like a compressor release: `<top>/build/<top>.jar`.
pub fn write_release_zip(path: &Path, top: &str) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.add_directory(format!("{top}/"), options).unwrap();
    zip.add_directory(format!("{top}/build/"), options).unwrap();
    zip.start_file(format!("{top}/build/{top}.jar"), options)
        .unwrap();
    zip.write_all(JAR_BYTES).unwrap();
    zip.finish().unwrap();
}

/// Same release, but with one byte of the stored jar flipped so its CRC fails
/// after the directories have already been unpacked.
pub fn write_bad_crc_release_zip(path: &Path, top: &str) {
    write_release_zip(path, top);

    let mut raw = fs::read(path).unwrap();
    let at = raw
        .windows(JAR_BYTES.len())
        .position(|w| w == JAR_BYTES)
        .unwrap();
    raw[at] ^= 0xff;
    fs::write(path, raw).unwrap();
}

pub fn release_zip_bytes(top: &str) -> Vec<u8> {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    write_release_zip(tmp.path(), top);
    fs::read(tmp.path()).unwrap()
}

/// Answers exactly one HTTP request on 127.0.0.1 with `status` and `body`.
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub fn serve_once(status: &'static str, body: Vec<u8>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            let n = reader.read_line(&mut line).unwrap();
            if n == 0 || line == "\r\n" {
                break;
            }
        }

        // The client may hang up early once it has seen enough.
        let mut stream = stream;
        let _ = write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });

    (base, handle)
}
