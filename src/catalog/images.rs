//! Image reference normalization.
//!
//! The catalog sometimes returns a stringified JSON array inside a single
//! image entry (`["https://..."]`), so brackets and quotes are stripped before
//! the scheme check.

/// Substituted whenever a record has no usable image reference.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/100";

/// Returns a displayable URL for the first image of a record.
///
/// Anything that does not start with an HTTP(S) scheme after cleanup is
/// replaced by [`PLACEHOLDER_IMAGE_URL`].
pub fn sanitize_image_url(images: &[String]) -> String {
    let Some(raw) = images.first() else {
        return PLACEHOLDER_IMAGE_URL.to_string();
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect();

    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        cleaned
    } else {
        PLACEHOLDER_IMAGE_URL.to_string()
    }
}
