use crate::shared::region::FaceRegion;

/// Channel-level reply to a [`MethodCall`](super::method_call::MethodCall).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodResponse {
    /// Ordered face regions, exactly as the detector produced them.
    /// Empty both for "no faces" and for degraded failures.
    Faces(Vec<FaceRegion>),
    /// The requested method is not part of this channel's surface.
    NotImplemented { method: String },
}

impl MethodResponse {
    /// Serializes to the wire form: faces as a plain JSON list of
    /// `{x, y, width, height}` mappings.
    pub fn to_json(&self) -> String {
        match self {
            MethodResponse::Faces(faces) => {
                serde_json::to_string(faces).expect("face list serialization cannot fail")
            }
            MethodResponse::NotImplemented { method } => {
                serde_json::to_string(&serde_json::json!({ "notImplemented": method }))
                    .expect("response serialization cannot fail")
            }
        }
    }

    /// Pretty-printed variant of [`to_json`](Self::to_json).
    pub fn to_json_pretty(&self) -> String {
        match self {
            MethodResponse::Faces(faces) => {
                serde_json::to_string_pretty(faces).expect("face list serialization cannot fail")
            }
            MethodResponse::NotImplemented { method } => {
                serde_json::to_string_pretty(&serde_json::json!({ "notImplemented": method }))
                    .expect("response serialization cannot fail")
            }
        }
    }
}
