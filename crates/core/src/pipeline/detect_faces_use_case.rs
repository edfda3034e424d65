use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_decoder::ImageDecoder;
use crate::imaging::grayscale;
use crate::shared::region::FaceRegion;

/// Single-call detection pipeline: decode → grayscale → detect.
///
/// Carries the plugin degradation contract: any failure along the way is
/// logged and collapses to an empty region list, never an error to the
/// caller.
pub struct DetectFacesUseCase {
    decoder: Box<dyn ImageDecoder>,
    detector: Box<dyn FaceDetector>,
}

impl DetectFacesUseCase {
    pub fn new(decoder: Box<dyn ImageDecoder>, detector: Box<dyn FaceDetector>) -> Self {
        Self { decoder, detector }
    }

    /// Decodes `image_bytes` and returns detected faces in detector order.
    pub fn execute(&mut self, image_bytes: &[u8]) -> Vec<FaceRegion> {
        let frame = match self.decoder.decode(image_bytes) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!(
                    "failed to decode image buffer ({} bytes): {e}",
                    image_bytes.len()
                );
                return Vec::new();
            }
        };
        if frame.is_empty() {
            log::error!("decoded image has no pixels");
            return Vec::new();
        }

        let gray = grayscale::to_luma(&frame);

        match self.detector.detect(&gray) {
            Ok(regions) => {
                log::debug!("detected {} face(s)", regions.len());
                regions
            }
            Err(e) => {
                log::error!("face detection failed: {e}");
                Vec::new()
            }
        }
    }
}
