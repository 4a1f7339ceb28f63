//! Raw OCR extraction input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alias::normalize_key;
use crate::error::ExtractionError;

/// The loosely-structured output of the upstream OCR engine.
///
/// Constructed once per incoming document and discarded after mapping.
/// Key comparison downstream is case- and whitespace-insensitive, which is
/// why [`RawExtraction::ensure_well_formed`] rejects key pairs that collapse
/// to the same normalized form: the document would be ambiguous.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawExtraction {
    /// Arbitrary OCR key to extracted text.
    pub fields: BTreeMap<String, String>,
    /// Full source text, carried through for audit only.
    #[serde(default)]
    pub raw_text: Option<String>,
    /// Upstream confidence score, nominally in [0, 100]. Out-of-range values
    /// are not rejected here; the validator flags them.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl RawExtraction {
    /// Build an extraction from key/value pairs.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            raw_text: None,
            confidence: None,
        }
    }

    /// Attach the upstream confidence score.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Attach the full source text.
    #[must_use]
    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = Some(raw_text.into());
        self
    }

    /// Check the structural preconditions the mapper relies on.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::AmbiguousKey`] when two raw keys normalize to the
    ///   same lookup key.
    /// - [`ExtractionError::NonFiniteConfidence`] when `confidence` is NaN or
    ///   infinite.
    pub fn ensure_well_formed(&self) -> Result<(), ExtractionError> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for key in self.fields.keys() {
            let normalized = normalize_key(key);
            if let Some(first) = seen.get(&normalized) {
                return Err(ExtractionError::AmbiguousKey {
                    first: (*first).to_string(),
                    second: key.clone(),
                });
            }
            seen.insert(normalized, key);
        }
        if let Some(confidence) = self.confidence
            && !confidence.is_finite()
        {
            return Err(ExtractionError::NonFiniteConfidence);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_keys_are_a_precondition_violation() {
        let extraction =
            RawExtraction::from_fields([("invoice_number", "INV-1"), ("Invoice Number", "INV-2")]);
        let error = extraction.ensure_well_formed().unwrap_err();
        assert!(matches!(error, ExtractionError::AmbiguousKey { .. }));
    }

    #[test]
    fn nan_confidence_is_a_precondition_violation() {
        let extraction =
            RawExtraction::from_fields([("invoice_number", "INV-1")]).with_confidence(f64::NAN);
        assert_eq!(
            extraction.ensure_well_formed(),
            Err(ExtractionError::NonFiniteConfidence)
        );
    }

    #[test]
    fn distinct_keys_pass() {
        let extraction = RawExtraction::from_fields([("total", "10"), ("tax", "1")])
            .with_confidence(92.5)
            .with_raw_text("INVOICE ...");
        assert_eq!(extraction.ensure_well_formed(), Ok(()));
    }
}
