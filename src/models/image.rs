use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

pub const IMAGE_TYPE_PREFIX: &str = "image/";

/// Extension to media type, the way a browser file picker declares them.
const MEDIA_TYPES: [(&str, &str); 8] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("bmp", "image/bmp"),
];

pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    MEDIA_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, media_type)| *media_type)
}

pub fn extension_for_media_type(media_type: &str) -> &'static str {
    match media_type {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/heic" => "heic",
        "image/heif" => "heif",
        "image/bmp" => "bmp",
        _ => "png",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Person,
    Outfit,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Person => write!(f, "person"),
            ImageRole::Outfit => write!(f, "outfit"),
        }
    }
}

/// An uploaded or generated picture in transport form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    media_type: String,
    payload: String,
}

impl EncodedImage {
    pub(crate) fn new(media_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            payload: payload.into(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Base64 text of the image bytes.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Image returned by the model, renderable as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    image: EncodedImage,
}

impl GeneratedImage {
    pub(crate) fn new(media_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            image: EncodedImage::new(media_type, payload),
        }
    }

    pub fn media_type(&self) -> &str {
        self.image.media_type()
    }

    pub fn payload(&self) -> &str {
        self.image.payload()
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.image.media_type(),
            self.image.payload()
        )
    }

    pub fn decode(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.image.payload())
    }

    pub fn file_extension(&self) -> &'static str {
        extension_for_media_type(self.image.media_type())
    }
}

impl fmt::Display for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_url())
    }
}
