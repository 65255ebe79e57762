// file: src/utils/validation.rs
// description: input validation and CQL term sanitization
// reference: https://developer.atlassian.com/cloud/confluence/advanced-searching-using-cql

use crate::error::{PipelineError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_keyword(keyword: &str) -> Result<()> {
        if keyword.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Keyword must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Escape a free-text term for embedding inside a quoted CQL string.
    ///
    /// Backslashes and double quotes would otherwise break out of the
    /// quoted term and malform the query.
    pub fn sanitize_cql_term(term: &str) -> String {
        let mut escaped = String::with_capacity(term.len());
        for c in term.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    pub fn validate_endpoint_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }
}
