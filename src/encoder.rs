use crate::{
    error::{Result, TryOnError},
    models::{media_type_for_extension, EncodedImage, IMAGE_TYPE_PREFIX},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// A file picked by the user, before it is read.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Type declared by the source (file picker, upload header), not sniffed.
    fn declared_type(&self) -> &str;

    fn size(&self) -> u64;

    /// Reads the whole file as `data:<type>;base64,<payload>`.
    async fn read_as_data_url(&self) -> io::Result<String>;
}

/// Validates and encodes one file. Checks run in order and the first failure
/// wins; nothing is read unless the type and size checks pass.
pub async fn encode<S: ImageSource + ?Sized>(file: &S) -> Result<EncodedImage> {
    let declared_type = file.declared_type();
    if !declared_type.starts_with(IMAGE_TYPE_PREFIX) {
        return Err(TryOnError::NotAnImage(declared_type.to_string()));
    }

    let size = file.size();
    if size > MAX_IMAGE_BYTES {
        return Err(TryOnError::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    let data_url = file
        .read_as_data_url()
        .await
        .map_err(TryOnError::ReadFailed)?;

    let payload = match data_url.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => payload,
        _ => return Err(TryOnError::MalformedResult),
    };

    log::debug!(
        "Encoded {} image: {} bytes -> {} base64 chars",
        declared_type,
        size,
        payload.len()
    );

    Ok(EncodedImage::new(declared_type, payload))
}

fn to_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// An image file on disk.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    declared_type: String,
    size: u64,
}

impl LocalFile {
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let declared_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(media_type_for_extension)
            .unwrap_or(UNKNOWN_MEDIA_TYPE)
            .to_string();

        Ok(Self {
            path,
            declared_type,
            size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ImageSource for LocalFile {
    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    /// Reads at most one byte past the size seen at `open`, so a file that
    /// grew afterwards is caught without pulling it all into memory.
    async fn read_as_data_url(&self) -> io::Result<String> {
        let file = tokio::fs::File::open(&self.path).await?;
        let mut bytes = Vec::with_capacity(self.size as usize);
        file.take(self.size + 1).read_to_end(&mut bytes).await?;

        if bytes.len() as u64 != self.size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{} changed size since it was opened ({} -> {} bytes)",
                    self.path.display(),
                    self.size,
                    bytes.len()
                ),
            ));
        }
        Ok(to_data_url(&self.declared_type, &bytes))
    }
}

/// Bytes already in memory, e.g. the body of an upload request.
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    declared_type: String,
    bytes: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(declared_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            declared_type: declared_type.into(),
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl ImageSource for InMemoryFile {
    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_as_data_url(&self) -> io::Result<String> {
        Ok(to_data_url(&self.declared_type, &self.bytes))
    }
}
