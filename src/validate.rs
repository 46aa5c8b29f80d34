//! Pre-submission validation of the upload form.
//!
//! Pure functions over (file metadata, raw drug string); nothing here reads
//! file contents or touches the network. VCF content validation is the
//! analysis service's job.

/// Maximum accepted upload size (5 MiB).
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Field-scoped validation failures, worded as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Only VCF files are allowed")]
    InvalidFileType,
    #[error("File size must be less than 5MB")]
    FileTooLarge,
    #[error("Please enter at least one drug name")]
    NoDrugsProvided,
}

/// Accept or reject an upload candidate by name and size.
///
/// Size is checked first: an oversized file is rejected as `FileTooLarge`
/// regardless of its extension. The `.vcf` suffix match is case-insensitive.
pub fn check_vcf_file(file_name: &str, size_bytes: u64) -> Result<(), ValidationError> {
    if size_bytes > MAX_FILE_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    if !file_name.to_lowercase().ends_with(".vcf") {
        return Err(ValidationError::InvalidFileType);
    }
    Ok(())
}

/// Normalize the raw comma-separated drug input.
///
/// Splits on commas, trims each piece, drops empties; the surviving names
/// are forwarded verbatim — no deduplication, no spell-checking.
pub fn parse_drug_list(raw: &str) -> Result<Vec<String>, ValidationError> {
    let drugs: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    if drugs.is_empty() {
        return Err(ValidationError::NoDrugsProvided);
    }
    Ok(drugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_vcf_within_limit() {
        check_vcf_file("patient.vcf", 1024).unwrap();
        check_vcf_file("patient.vcf", MAX_FILE_BYTES).unwrap();
    }

    #[test]
    fn vcf_suffix_is_case_insensitive() {
        check_vcf_file("PATIENT.VCF", 1024).unwrap();
        check_vcf_file("patient.Vcf", 1024).unwrap();
    }

    #[test]
    fn rejects_non_vcf_extension() {
        for name in ["patient.txt", "patient.vcf.gz", "patient", "vcf"] {
            assert_eq!(
                check_vcf_file(name, 1024),
                Err(ValidationError::InvalidFileType),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_file_regardless_of_extension() {
        assert_eq!(
            check_vcf_file("patient.vcf", MAX_FILE_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
        assert_eq!(
            check_vcf_file("patient.txt", MAX_FILE_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn parses_and_normalizes_drug_list() {
        assert_eq!(
            parse_drug_list("Warfarin, , Clopidogrel ,").unwrap(),
            vec!["Warfarin".to_string(), "Clopidogrel".to_string()]
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            parse_drug_list("Codeine,Warfarin,Codeine").unwrap(),
            vec!["Codeine", "Warfarin", "Codeine"]
        );
    }

    #[test]
    fn rejects_empty_whitespace_and_comma_only_input() {
        for raw in ["", "   ", ",", " , , ", "\t"] {
            assert_eq!(
                parse_drug_list(raw),
                Err(ValidationError::NoDrugsProvided),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_messages_match_user_copy() {
        assert_eq!(
            ValidationError::InvalidFileType.to_string(),
            "Only VCF files are allowed"
        );
        assert_eq!(
            ValidationError::FileTooLarge.to_string(),
            "File size must be less than 5MB"
        );
        assert_eq!(
            ValidationError::NoDrugsProvided.to_string(),
            "Please enter at least one drug name"
        );
    }
}
