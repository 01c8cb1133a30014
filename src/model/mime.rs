//! MIME types for media assets.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Image MIME types with first-class support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMimeType {
    Webp,
    Jpeg,
    Bmp,
    Gif,
    Png,
}

impl ImageMimeType {
    pub const ALL: [ImageMimeType; 5] = [
        ImageMimeType::Webp,
        ImageMimeType::Jpeg,
        ImageMimeType::Bmp,
        ImageMimeType::Gif,
        ImageMimeType::Png,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMimeType::Webp => "image/webp",
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Bmp => "image/bmp",
            ImageMimeType::Gif => "image/gif",
            ImageMimeType::Png => "image/png",
        }
    }
}

/// Video MIME types with first-class support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoMimeType {
    Quicktime,
    Mp4,
    Ogg,
    Webm,
    XMsvideo,
}

impl VideoMimeType {
    pub const ALL: [VideoMimeType; 5] = [
        VideoMimeType::Quicktime,
        VideoMimeType::Mp4,
        VideoMimeType::Ogg,
        VideoMimeType::Webm,
        VideoMimeType::XMsvideo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoMimeType::Quicktime => "video/quicktime",
            VideoMimeType::Mp4 => "video/mp4",
            VideoMimeType::Ogg => "video/ogg",
            VideoMimeType::Webm => "video/webm",
            VideoMimeType::XMsvideo => "video/x-msvideo",
        }
    }
}

/// MIME type of a media asset.
///
/// Parsing never fails: strings outside the known image and video types are
/// kept verbatim in [`AssetMimeType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetMimeType {
    Image(ImageMimeType),
    Video(VideoMimeType),
    Other(String),
}

impl AssetMimeType {
    pub fn as_str(&self) -> &str {
        match self {
            AssetMimeType::Image(image) => image.as_str(),
            AssetMimeType::Video(video) => video.as_str(),
            AssetMimeType::Other(other) => other,
        }
    }

    /// Top-level media type (`image`, `video`, `application`, ...).
    ///
    /// A string without a `/` is its own group.
    pub fn group(&self) -> &str {
        match self {
            AssetMimeType::Image(_) => "image",
            AssetMimeType::Video(_) => "video",
            AssetMimeType::Other(other) => other.split('/').next().unwrap_or(other),
        }
    }

    pub fn is_image(&self) -> bool {
        self.group() == "image"
    }

    pub fn is_video(&self) -> bool {
        self.group() == "video"
    }
}

impl fmt::Display for AssetMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetMimeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetMimeType::from(s.to_string()))
    }
}

impl From<String> for AssetMimeType {
    fn from(s: String) -> Self {
        if let Some(image) = ImageMimeType::ALL.into_iter().find(|m| m.as_str() == s) {
            return AssetMimeType::Image(image);
        }
        if let Some(video) = VideoMimeType::ALL.into_iter().find(|m| m.as_str() == s) {
            return AssetMimeType::Video(video);
        }
        AssetMimeType::Other(s)
    }
}

impl From<&str> for AssetMimeType {
    fn from(s: &str) -> Self {
        AssetMimeType::from(s.to_string())
    }
}

impl From<AssetMimeType> for String {
    fn from(mime: AssetMimeType) -> Self {
        match mime {
            AssetMimeType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl From<ImageMimeType> for AssetMimeType {
    fn from(image: ImageMimeType) -> Self {
        AssetMimeType::Image(image)
    }
}

impl From<VideoMimeType> for AssetMimeType {
    fn from(video: VideoMimeType) -> Self {
        AssetMimeType::Video(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_parse() {
        assert_eq!(
            AssetMimeType::from("image/webp"),
            AssetMimeType::Image(ImageMimeType::Webp)
        );
        assert_eq!(
            AssetMimeType::from("video/x-msvideo"),
            AssetMimeType::Video(VideoMimeType::XMsvideo)
        );
    }

    #[test]
    fn test_unknown_type_kept_verbatim() {
        let mime: AssetMimeType = "application/pdf".parse().unwrap();
        assert_eq!(mime, AssetMimeType::Other("application/pdf".to_string()));
        assert_eq!(mime.group(), "application");
        assert_eq!(mime.to_string(), "application/pdf");
    }

    #[test]
    fn test_group() {
        assert_eq!(AssetMimeType::from(ImageMimeType::Gif).group(), "image");
        assert_eq!(AssetMimeType::from("image/svg+xml").group(), "image");
        assert!(AssetMimeType::from("image/svg+xml").is_image());
        assert_eq!(AssetMimeType::from("font/woff2").group(), "font");
        assert_eq!(AssetMimeType::from("weird").group(), "weird");
        assert!(AssetMimeType::from(VideoMimeType::Mp4).is_video());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let mime: AssetMimeType = serde_json::from_str("\"video/webm\"").unwrap();
        assert_eq!(mime, AssetMimeType::Video(VideoMimeType::Webm));
        assert_eq!(serde_json::to_string(&mime).unwrap(), "\"video/webm\"");

        let other: AssetMimeType = serde_json::from_str("\"audio/mpeg\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"audio/mpeg\"");
    }
}
