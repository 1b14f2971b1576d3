//! Ports - interfaces between the stream contracts and the outside world.
//!
//! - **Primary ports**: `InputStream`, `OutputStream` (what callers drive)
//! - **Secondary ports**: `HostFiles` (what file streams need from the host)

mod host_files;
mod input_stream;
mod output_stream;

pub use host_files::HostFiles;
pub use input_stream::InputStream;
pub use output_stream::OutputStream;
