//! Admission rules for the locally chosen document

/// The only media type this workflow accepts
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

/// Shown when the chosen file is not a PDF (or the picker returned nothing)
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid PDF file.";

/// Shown when upload is requested without an admitted file
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Check the declared media type of a chosen file.
///
/// Deterministic: only the declared type is consulted, never the content.
pub fn validate_file_type(mime_type: &str) -> Result<(), String> {
    if mime_type == ACCEPTED_MIME_TYPE {
        Ok(())
    } else {
        Err(INVALID_FILE_MESSAGE.to_string())
    }
}
