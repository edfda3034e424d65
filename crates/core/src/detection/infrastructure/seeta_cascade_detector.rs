use std::io::Cursor;
use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::constants::{
    CASCADE_SCORE_THRESH, MIN_FACE_SIZE, PYRAMID_SCALE_FACTOR, SLIDE_WINDOW_STEP,
};
use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Face detector backed by the `rustface` funnel cascade.
///
/// The pretrained model is parsed once at construction from a staged
/// classifier file and held for the detector's lifetime. The cascade
/// object itself is rebuilt from the model on every call: it carries
/// internal pyramid buffers and is not `Send`, while the parsed model is
/// cheap to clone.
pub struct SeetaCascadeDetector {
    model: rustface::Model,
}

impl SeetaCascadeDetector {
    /// Loads the cascade model from a staged classifier file.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(model_path)?;
        let model = rustface::read_model(Cursor::new(bytes))?;
        log::debug!("cascade model loaded from {}", model_path.display());
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaCascadeDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceRegion>, Box<dyn std::error::Error>> {
        if frame.channels() != 1 {
            return Err(format!(
                "cascade detector expects a single-channel frame, got {} channels",
                frame.channels()
            )
            .into());
        }

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(CASCADE_SCORE_THRESH);
        detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

        let image = rustface::ImageData::new(frame.data(), frame.width(), frame.height());
        let faces = detector.detect(&image);

        // Cascade ordering is part of the contract; no re-sorting.
        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion::new(bbox.x(), bbox.y(), bbox.width() as i32, bbox.height() as i32)
            })
            .collect())
    }
}
