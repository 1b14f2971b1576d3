//! Integration tests for file streams on the host file system.

use std::fs;

use streamrs::{
    BufferedInputStream, FileInputStream, InputStream, LineInputStream, OpenMode, OutputStream,
    ReadOutcome, StreamError,
};
use streamrs_codecs::{HexDecodeInputStream, HexEncodeOutputStream};
use streamrs_host::{StdFiles, open_append, open_input, open_output};
use tempfile::TempDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn path_in(dir: &TempDir, name: &str) -> anyhow::Result<String> {
    dir.path()
        .join(name)
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("non utf-8 temp path"))
}

#[test]
fn test_write_then_read_back() -> anyhow::Result<()> {
    init_logger();
    let dir = tempfile::tempdir()?;
    let path = path_in(&dir, "hello.txt")?;

    let mut output = open_output(&path);
    assert!(output.open_error().is_none());
    assert_eq!(output.write(b"hello, ")?, 7);
    assert_eq!(output.write_substring(b">>world<<", 2, -2)?, 5);
    output.close()?;
    assert_eq!(fs::read(&path)?, b"hello, world");

    let mut input = open_input(&path);
    assert_eq!(input.available(), 12);

    let mut bytes = Vec::new();
    assert_eq!(input.read(&mut bytes, 5)?, ReadOutcome::Bytes(5));
    assert_eq!(bytes, b"hello");
    assert_eq!(input.position(), 5);
    assert_eq!(input.available(), 7);

    assert_eq!(input.skip(2)?, 2);
    assert_eq!(input.read(&mut bytes, 64)?, ReadOutcome::Bytes(5));
    assert_eq!(bytes, b"world");
    assert_eq!(input.read(&mut bytes, 1)?, ReadOutcome::Eof);

    input.close()?;
    assert!(matches!(input.close(), Err(StreamError::AlreadyClosed)));
    Ok(())
}

#[test]
fn test_append_keeps_existing_content() -> anyhow::Result<()> {
    init_logger();
    let dir = tempfile::tempdir()?;
    let path = path_in(&dir, "log.txt")?;
    fs::write(&path, b"one\n")?;

    let mut output = open_append(&path);
    output.write(b"two\n")?;
    output.close()?;

    let mut lines = LineInputStream::new(open_input(&path));
    assert_eq!(lines.read_line()?, Some(b"one\n".to_vec()));
    assert_eq!(lines.read_line()?, Some(b"two\n".to_vec()));
    assert_eq!(lines.read_line()?, None);
    Ok(())
}

#[test]
fn test_missing_file_starts_closed() -> anyhow::Result<()> {
    init_logger();
    let dir = tempfile::tempdir()?;
    let path = path_in(&dir, "missing.bin")?;

    let mut input = FileInputStream::open(StdFiles, &path, OpenMode::Read);
    assert!(input.is_closed());
    assert_eq!(
        input.open_error().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
    assert!(matches!(
        input.read(&mut Vec::new(), 1),
        Err(StreamError::Closed)
    ));
    Ok(())
}

#[test]
fn test_hex_file_decoded_with_mark_reset() -> anyhow::Result<()> {
    init_logger();
    let dir = tempfile::tempdir()?;
    let path = path_in(&dir, "dump.hex")?;

    let mut encoder = HexEncodeOutputStream::new(open_output(&path));
    encoder.write(b"streams")?;
    encoder.close()?;
    assert_eq!(fs::read(&path)?, b"73747265616D73");

    let mut input = BufferedInputStream::with_buffer_size(
        HexDecodeInputStream::new(open_input(&path)),
        4,
    )?;

    let mut bytes = Vec::new();
    input.mark(16)?;
    input.read(&mut bytes, 3)?;
    assert_eq!(bytes, b"str");

    input.reset()?;
    input.read(&mut bytes, 16)?;
    assert_eq!(bytes, b"streams");
    Ok(())
}
