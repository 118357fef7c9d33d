//! File filtering logic for the archive walk.

use std::path::Path;

/// Filters files to determine if they are supported media
pub struct MediaFilter {
    /// File extensions to include (lowercase, no dot)
    extensions: std::collections::HashSet<&'static str>,
}

impl MediaFilter {
    /// Extensions the archiver handles. Fixed set, not configurable.
    const SUPPORTED: &'static [&'static str] = &["jpg", "jpeg", "png", "mp4", "mov", "heic"];

    /// Create a filter over the supported media extensions
    pub fn new() -> Self {
        Self {
            extensions: Self::SUPPORTED.iter().copied().collect(),
        }
    }

    /// Extract the normalized extension (lowercase, no leading dot)
    pub fn normalized_extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Check if a file should be archived, returning its normalized
    /// extension when it should.
    pub fn classify(&self, path: &Path) -> Option<String> {
        let ext = Self::normalized_extension(path)?;
        if self.extensions.contains(ext.as_str()) {
            Some(ext)
        } else {
            None
        }
    }

    /// Check if a file should be archived
    pub fn should_include(&self, path: &Path) -> bool {
        self.classify(path).is_some()
    }
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_includes_jpeg() {
        let filter = MediaFilter::new();
        assert!(filter.should_include(Path::new("/photos/image.jpg")));
        assert!(filter.should_include(Path::new("/photos/image.JPEG")));
    }

    #[test]
    fn filter_includes_videos() {
        let filter = MediaFilter::new();
        assert!(filter.should_include(Path::new("/photos/clip.mp4")));
        assert!(filter.should_include(Path::new("/photos/clip.MOV")));
    }

    #[test]
    fn filter_includes_heic() {
        let filter = MediaFilter::new();
        assert!(filter.should_include(Path::new("/photos/IMG_1234.HEIC")));
    }

    #[test]
    fn filter_excludes_non_media() {
        let filter = MediaFilter::new();
        assert!(!filter.should_include(Path::new("/photos/document.pdf")));
        assert!(!filter.should_include(Path::new("/photos/notes.txt")));
        assert!(!filter.should_include(Path::new("/photos/sidecar.xmp")));
    }

    #[test]
    fn filter_handles_no_extension() {
        let filter = MediaFilter::new();
        assert!(!filter.should_include(Path::new("/photos/no_extension")));
    }

    #[test]
    fn classify_normalizes_case() {
        let filter = MediaFilter::new();
        assert_eq!(filter.classify(Path::new("photo.JPG")), Some("jpg".to_string()));
        assert_eq!(filter.classify(Path::new("photo.Heic")), Some("heic".to_string()));
        assert_eq!(filter.classify(Path::new("photo.gif")), None);
    }
}
