pub mod classifier_store;
pub mod seeta_cascade_detector;
