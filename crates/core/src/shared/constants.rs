pub const CASCADE_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";
pub const CASCADE_MODEL_URL: &str =
    "https://github.com/atomashpolskiy/rustface/raw/master/model/seeta_fd_frontal_v1.0.bin";

/// App-private directory name for staged data.
pub const APP_DATA_DIR: &str = "FaceBridge";

/// Subdirectory the classifier is staged into on each startup.
pub const STAGING_SUBDIR: &str = "cascade";

/// Window growth per level of the multi-scale search.
pub const CASCADE_SCALE_STEP: f32 = 1.1;

/// Image shrink ratio per pyramid level; the reciprocal of the scale step.
pub const PYRAMID_SCALE_FACTOR: f32 = 1.0 / CASCADE_SCALE_STEP;

/// Smallest detectable face, in pixels (square window).
pub const MIN_FACE_SIZE: u32 = 30;

/// Cascade confidence gate below which candidate windows are discarded.
pub const CASCADE_SCORE_THRESH: f64 = 2.0;

/// Sliding-window stride in pixels, both axes.
pub const SLIDE_WINDOW_STEP: u32 = 4;
