//! Upload validation, decoupled from storage and HTTP specifics.

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Empty file")]
    EmptyFile,

    #[error("Missing file name")]
    MissingFileName,
}

/// Checks applied to every upload before the pipeline runs.
///
/// There is deliberately no extension allowlist here: files with
/// unsupported extensions are passed through by contract, not rejected.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Validate the upload size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Require a non-empty file name; extension classification needs one.
    pub fn validate_file_name<'a>(
        &self,
        file_name: Option<&'a str>,
    ) -> Result<&'a str, ValidationError> {
        match file_name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(ValidationError::MissingFileName),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> UploadValidator {
        UploadValidator::new(1024 * 1024)
    }

    #[test]
    fn test_validate_file_size_ok() {
        assert!(test_validator().validate_file_size(512 * 1024).is_ok());
    }

    #[test]
    fn test_validate_file_size_too_large() {
        assert!(matches!(
            test_validator().validate_file_size(2 * 1024 * 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_file_size_empty() {
        assert!(matches!(
            test_validator().validate_file_size(0),
            Err(ValidationError::EmptyFile)
        ));
    }

    #[test]
    fn test_validate_file_name_ok() {
        assert_eq!(
            test_validator().validate_file_name(Some("photo.jpg")).unwrap(),
            "photo.jpg"
        );
    }

    #[test]
    fn test_validate_file_name_missing_or_blank() {
        assert!(matches!(
            test_validator().validate_file_name(None),
            Err(ValidationError::MissingFileName)
        ));
        assert!(matches!(
            test_validator().validate_file_name(Some("   ")),
            Err(ValidationError::MissingFileName)
        ));
    }
}
