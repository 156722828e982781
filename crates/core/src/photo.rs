//! Object keys for uploaded dog photos.

use uuid::Uuid;

/// Number of hex characters taken from a random UUID for the key stem.
pub const PHOTO_KEY_STEM_LEN: usize = 6;

/// Strip any client-supplied directory part, `/` or `\\` separated.
pub fn file_basename(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Return the extension of `filename` including the leading dot, taken from
/// the last `.` of its basename. Returns an empty string when there is no dot.
pub fn file_extension(filename: &str) -> &str {
    let name = file_basename(filename);
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Build a storage key from an explicit stem and the original file name.
pub fn photo_key_with_stem(stem: &str, filename: &str) -> String {
    format!("{stem}{}", file_extension(filename))
}

/// Generate a short randomized key for an uploaded photo, keeping the
/// original file extension (e.g. `"3fa9c1.jpg"`).
pub fn generate_photo_key(filename: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    photo_key_with_stem(&hex[..PHOTO_KEY_STEM_LEN], filename)
}
