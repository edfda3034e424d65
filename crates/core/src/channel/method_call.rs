/// Wire name of the detection operation.
pub const DETECT_FACES: &str = "detectFaces";

/// A decoded plugin method call.
///
/// The channel boundary receives raw `(method name, payload)` pairs;
/// decoding them into a tagged type up front keeps dispatch exhaustive
/// instead of string-matched at every call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodCall {
    /// Detect faces in an encoded image buffer.
    DetectFaces { image: Vec<u8> },
}

/// The caller named a method this channel does not provide.
///
/// An expected outcome of decoding, answered with a `notImplemented`
/// response, not a fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethod {
    pub method: String,
}

impl MethodCall {
    /// Decodes a raw `(method, payload)` pair from the channel boundary.
    pub fn decode(method: &str, payload: Vec<u8>) -> Result<MethodCall, UnknownMethod> {
        match method {
            DETECT_FACES => Ok(MethodCall::DetectFaces { image: payload }),
            other => Err(UnknownMethod {
                method: other.to_string(),
            }),
        }
    }
}
