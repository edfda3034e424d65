use crate::shared::frame::Frame;

/// Domain interface for turning encoded image bytes into a pixel matrix.
///
/// Implementations decode a complete container (JPEG, PNG, ...) supplied
/// by the caller; partial or streaming input is not supported.
pub trait ImageDecoder: Send {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, Box<dyn std::error::Error>>;
}
