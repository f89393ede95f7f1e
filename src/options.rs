/// Validation behavior for the codec functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Reject bit characters outside '0'/'1' and coordinate labels outside
    /// a1-h8. When false, bad bit characters read as unset and unknown
    /// coordinates are silently ignored, matching permissive callers.
    pub strict: bool,
}

pub const STRICT: bool = true;

impl Default for CodecOptions {
    fn default() -> Self {
        Self { strict: STRICT }
    }
}

impl CodecOptions {
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}
