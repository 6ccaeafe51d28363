use thiserror::Error;

/// Form-level validation failures. Surfaced inline by the UI and never
/// propagated past the command boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mohon isi materi pokok kurikulum.")]
    MissingTopic,

    #[error("Pilih minimal satu minat murid.")]
    NoInterests,
}
