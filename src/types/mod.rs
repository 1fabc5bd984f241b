pub mod cv_record;

pub use cv_record::{CvRecord, Section};
