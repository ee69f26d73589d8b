//! Result types for the verification workflow

/// Outcome of issuing a verification code.
///
/// The raw code is returned to the caller so the presentation layer can
/// decide whether to expose it (development only) or keep it server-side.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// The generated 6-digit code
    pub code: String,

    /// Seconds until the code expires
    pub expires_in: i64,
}
