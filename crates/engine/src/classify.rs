//! Routing of a matched file to the bucket it contributes to.

/// Extensions (without the dot) that are grouped under [`MEDIA_KEY`].
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "mp4", "avi", "mov", "mkv", "mp3", "opus", "ogg", "wav",
    "m4a",
];

pub const MEDIA_KEY: &str = "media";
pub const WILDCARD_KEY: &str = "*";

/// Text after the last `.` of a file name, `None` when there is no dot.
///
/// A leading-dot name such as `.bashrc` yields `Some("bashrc")`.
#[must_use]
pub fn extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx + 1..])
}

/// Matching is exact and case-sensitive: `PNG` is not media.
#[must_use]
pub fn is_media(ext: &str) -> bool {
    MEDIA_EXTENSIONS.contains(&ext)
}

/// Bucket key for a file name: `"*"`, `"media"` or `"." + extension`.
#[must_use]
pub fn classification_key(file_name: &str) -> String {
    match extension(file_name) {
        None | Some("") => WILDCARD_KEY.to_string(),
        Some(ext) if is_media(ext) => MEDIA_KEY.to_string(),
        Some(ext) => format!(".{ext}"),
    }
}
