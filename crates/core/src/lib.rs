//! Face detection bridge core.
//!
//! Stages a pretrained cascade classifier into app-private storage at
//! startup, decodes caller-supplied image buffers, and answers
//! `detectFaces` method calls with ordered face bounding boxes.

pub mod channel;
pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod shared;
