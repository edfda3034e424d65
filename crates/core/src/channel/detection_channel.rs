use std::path::Path;

use crate::channel::method_call::{MethodCall, UnknownMethod};
use crate::channel::response::MethodResponse;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::classifier_store;
use crate::detection::infrastructure::seeta_cascade_detector::SeetaCascadeDetector;
use crate::imaging::domain::image_decoder::ImageDecoder;
use crate::imaging::infrastructure::codec_decoder::CodecImageDecoder;
use crate::pipeline::detect_faces_use_case::DetectFacesUseCase;

/// The plugin call surface: owns the detection pipeline and answers
/// decoded method calls.
///
/// A channel is either ready (classifier staged and loaded at startup) or
/// uninitialized (startup failed). There is no transition back and no
/// retry within a running process; an uninitialized channel answers every
/// `detectFaces` call with an empty region list.
pub struct DetectionChannel {
    bridge: Option<DetectFacesUseCase>,
}

impl DetectionChannel {
    /// Stages the bundled classifier into `target_dir` and loads it.
    ///
    /// Startup failures are logged and leave the channel uninitialized;
    /// they are never raised to the caller.
    pub fn initialize(bundled_classifier: &Path, target_dir: &Path) -> Self {
        let staged = match classifier_store::stage(bundled_classifier, target_dir) {
            Ok(path) => path,
            Err(e) => {
                log::error!("classifier staging failed: {e}");
                return Self::uninitialized();
            }
        };

        let detector = match SeetaCascadeDetector::new(&staged) {
            Ok(detector) => detector,
            Err(e) => {
                log::error!("classifier load failed from {}: {e}", staged.display());
                return Self::uninitialized();
            }
        };

        log::debug!("classifier staged at {}", staged.display());
        Self::with_pipeline(Box::new(CodecImageDecoder::new()), Box::new(detector))
    }

    /// Builds a ready channel from explicit pipeline parts.
    pub fn with_pipeline(decoder: Box<dyn ImageDecoder>, detector: Box<dyn FaceDetector>) -> Self {
        Self {
            bridge: Some(DetectFacesUseCase::new(decoder, detector)),
        }
    }

    /// A channel whose startup never completed.
    pub fn uninitialized() -> Self {
        Self { bridge: None }
    }

    pub fn is_ready(&self) -> bool {
        self.bridge.is_some()
    }

    /// Answers one decoded method call.
    pub fn handle(&mut self, call: MethodCall) -> MethodResponse {
        match call {
            MethodCall::DetectFaces { image } => match self.bridge.as_mut() {
                Some(bridge) => MethodResponse::Faces(bridge.execute(&image)),
                None => {
                    log::error!("detectFaces called before the classifier was initialized");
                    MethodResponse::Faces(Vec::new())
                }
            },
        }
    }

    /// Answers a raw `(method, payload)` pair, mapping unknown method
    /// names to a `notImplemented` response.
    pub fn handle_raw(&mut self, method: &str, payload: Vec<u8>) -> MethodResponse {
        match MethodCall::decode(method, payload) {
            Ok(call) => self.handle(call),
            Err(UnknownMethod { method }) => MethodResponse::NotImplemented { method },
        }
    }
}
