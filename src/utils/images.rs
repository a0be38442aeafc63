use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::fmt;

/// Raw upload ceiling (5MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
/// Ceiling on the stored data URI, checked after encoding. Base64 inflates
/// by 4/3, so this still admits uploads near the raw ceiling's working range
/// while bounding what a single record can occupy in storage.
pub const MAX_DATA_URI_LEN: usize = 6 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    TooLarge,
    NotAnImage,
    EncodedTooLarge,
}

impl ImageError {
    pub fn message(&self) -> &'static str {
        match self {
            ImageError::TooLarge => "Image size should be less than 5MB",
            ImageError::NotAnImage => "Please select a valid image file",
            ImageError::EncodedTooLarge => {
                "Image too large after processing. Please use a smaller image."
            }
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ImageError {}

/// Turns an uploaded file into the stored `data:` URI. The bytes must sniff
/// as an image and pass both size ceilings.
pub fn encode_profile_image(bytes: &[u8]) -> Result<String, ImageError> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge);
    }
    let kind = infer::get(bytes).ok_or(ImageError::NotAnImage)?;
    if !kind.mime_type().starts_with("image/") {
        return Err(ImageError::NotAnImage);
    }
    let data_uri = format!("data:{};base64,{}", kind.mime_type(), B64.encode(bytes));
    if data_uri.len() > MAX_DATA_URI_LEN {
        return Err(ImageError::EncodedTooLarge);
    }
    Ok(data_uri)
}

/// Recovers the original bytes from a stored data URI.
pub fn decode_profile_image(data_uri: &str) -> Option<Vec<u8>> {
    let (_, payload) = data_uri.split_once(";base64,")?;
    B64.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len.max(8)];
        bytes[..8].copy_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        bytes
    }

    #[test]
    fn accepts_a_four_megabyte_image_and_round_trips_it() {
        let original = png_bytes(4 * 1024 * 1024);
        let uri = encode_profile_image(&original).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() <= MAX_DATA_URI_LEN);
        assert_eq!(decode_profile_image(&uri).unwrap(), original);
    }

    #[test]
    fn rejects_a_six_megabyte_image_before_encoding() {
        let oversized = png_bytes(6 * 1024 * 1024);
        assert_eq!(
            encode_profile_image(&oversized),
            Err(ImageError::TooLarge)
        );
    }

    #[test]
    fn rejects_bytes_that_do_not_sniff_as_an_image() {
        assert_eq!(
            encode_profile_image(b"just some plain text, no magic"),
            Err(ImageError::NotAnImage)
        );
        // A real but non-image format is also refused.
        let pdf = b"%PDF-1.4 rest of the document";
        assert_eq!(encode_profile_image(pdf), Err(ImageError::NotAnImage));
    }

    #[test]
    fn rejects_when_the_encoded_form_overruns_the_storage_ceiling() {
        // Under the raw ceiling, but 4/3 inflation pushes the URI past the
        // encoded one.
        let awkward = png_bytes(5 * 1024 * 1024 - 1);
        assert_eq!(
            encode_profile_image(&awkward),
            Err(ImageError::EncodedTooLarge)
        );
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            ImageError::TooLarge.message(),
            "Image size should be less than 5MB"
        );
        assert_eq!(
            ImageError::NotAnImage.message(),
            "Please select a valid image file"
        );
    }
}
