//! Archive extraction
//!
//! Unpacks tarballs, detecting the compression from the stream's magic
//! bytes rather than the file extension.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Component, Path, PathBuf};

use crate::error::{ArchiveError, SysrootError};
use crate::infra::filesystem;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const ZSTD_MAGIC: &[u8] = &[0x28, 0xb5, 0x2f, 0xfd];
const XZ_MAGIC: &[u8] = &[0xfd, b'7', b'z', b'X', b'Z', 0x00];
const BZIP2_MAGIC: &[u8] = b"BZh";

/// Compression wrapped around a tar stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
    Xz,
    Bzip2,
}

impl Compression {
    /// Detect compression from the leading bytes of a stream
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(GZIP_MAGIC) {
            Self::Gzip
        } else if header.starts_with(ZSTD_MAGIC) {
            Self::Zstd
        } else if header.starts_with(XZ_MAGIC) {
            Self::Xz
        } else if header.starts_with(BZIP2_MAGIC) {
            Self::Bzip2
        } else {
            Self::None
        }
    }
}

/// Open an archive and return a reader producing the raw tar stream
fn open_tar_stream(archive: &Path) -> Result<Box<dyn Read>, SysrootError> {
    filesystem::require_file(archive)?;

    let open_err = |e: std::io::Error| ArchiveError::Open {
        path: archive.to_path_buf(),
        error: e.to_string(),
    };

    let file = File::open(archive).map_err(open_err)?;
    let mut reader = BufReader::new(file);
    let compression = Compression::detect(reader.fill_buf().map_err(open_err)?);
    tracing::debug!("Detected {compression:?} compression for {}", archive.display());

    let stream: Box<dyn Read> = match compression {
        Compression::None => Box::new(reader),
        Compression::Gzip => Box::new(flate2::bufread::GzDecoder::new(reader)),
        Compression::Zstd => Box::new(zstd::stream::Decoder::with_buffer(reader).map_err(open_err)?),
        Compression::Xz => Box::new(xz::read::XzDecoder::new(reader)),
        Compression::Bzip2 => {
            return Err(ArchiveError::UnsupportedCompression {
                path: archive.to_path_buf(),
                format: "bzip2".to_string(),
            }
            .into())
        }
    };
    Ok(stream)
}

/// Keep an extracted directory writable by its owner
///
/// Later members must still land inside it, and the scratch directory
/// must remain removable.
#[cfg(unix)]
fn keep_owner_writable(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(dir)?.permissions();
    permissions.set_mode(permissions.mode() | 0o700);
    std::fs::set_permissions(dir, permissions)
}

#[cfg(not(unix))]
fn keep_owner_writable(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Extract every member of `archive` into `dest`
///
/// Returns the member paths in archive order; the first one carries the
/// wrapper directory name. Members that would land outside `dest` abort
/// the extraction. Directory modes are widened to stay owner-writable.
pub fn unpack(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, SysrootError> {
    let stream = open_tar_stream(archive)?;
    filesystem::create_dir_all(dest)?;

    let read_err = |e: std::io::Error| ArchiveError::Read {
        path: archive.to_path_buf(),
        error: e.to_string(),
    };

    let mut tar = tar::Archive::new(stream);
    tar.set_preserve_permissions(true);
    tar.set_preserve_mtime(true);

    let mut members = Vec::new();
    for entry in tar.entries().map_err(read_err)? {
        let mut entry = entry.map_err(read_err)?;
        let member = entry.path().map_err(read_err)?.into_owned();

        let extract_err = |e: std::io::Error| ArchiveError::Extract {
            path: archive.to_path_buf(),
            member: member.clone(),
            error: e.to_string(),
        };

        let unpacked = entry.unpack_in(dest).map_err(extract_err)?;
        if !unpacked {
            return Err(ArchiveError::UnsafeMember {
                path: archive.to_path_buf(),
                member,
            }
            .into());
        }

        if entry.header().entry_type().is_dir() {
            let relative: PathBuf = member
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .collect();
            keep_owner_writable(&dest.join(relative)).map_err(extract_err)?;
        }

        members.push(member);
    }

    tracing::debug!(
        "Unpacked {} members from {} into {}",
        members.len(),
        archive.display(),
        dest.display()
    );
    Ok(members)
}
