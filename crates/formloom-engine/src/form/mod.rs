/*!
 * # Validated forms
 *
 * Properties editors hold their editing state in a `Form`. Each field moves
 * through the usual lifecycle:
 *
 * ```text
 * Pristine --change--> Touched --blur--> Valid | Invalid
 * ```
 *
 * *When* a field is checked is the form's `ValidationMode`. *Whether* a change
 * leaves the editor is its `PropagationPolicy`, decided independently of the
 * displayed verdict. Under `OptimisticWrite` every change is written out, so other
 * readers of the builder tree can observe values the schema would reject.
 */

use std::collections::BTreeMap;
use std::fmt;

/// Reason a field value fails its schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Must contain at least {min} character(s)")]
    TooShort { min: usize },
    #[error("Must contain at most {max} character(s)")]
    TooLong { max: usize },
    #[error("Invalid option '{value}', expected one of: {}", .expected.join(", "))]
    InvalidOption {
        value: String,
        expected: Vec<&'static str>,
    },
}

/// When field verdicts are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    OnBlur,
    OnChange,
}

/// Whether a change is written to the builder tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropagationPolicy {
    /// Write every change, valid or not
    #[default]
    OptimisticWrite,
    /// Write only changes whose field passes validation
    ValidatedWrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Touched,
    Valid,
    Invalid(FieldError),
}

/// Field set and per-field rules of one form
pub trait Schema {
    type Field: Copy + Ord + fmt::Debug + 'static;
    type Values: Clone + PartialEq + fmt::Debug;

    fn fields() -> &'static [Self::Field];

    fn validate_field(values: &Self::Values, field: Self::Field) -> Result<(), FieldError>;
}

/// Trimmed length must fall within `min..=max`.
///
/// Trimming also strips U+FEFF. Length is counted in UTF-16 code units.
pub fn validate_trimmed_length(value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let len = trimmed.encode_utf16().count();
    if len < min {
        Err(FieldError::TooShort { min })
    } else if len > max {
        Err(FieldError::TooLong { max })
    } else {
        Ok(())
    }
}

/// Value must be one of `options`
pub fn validate_option(value: &str, options: &[&'static str]) -> Result<(), FieldError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::InvalidOption {
            value: value.to_string(),
            expected: options.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form<S: Schema> {
    values: S::Values,
    statuses: BTreeMap<S::Field, FieldStatus>,
    mode: ValidationMode,
    policy: PropagationPolicy,
}

impl<S: Schema> Form<S> {
    pub fn new(defaults: S::Values, mode: ValidationMode, policy: PropagationPolicy) -> Self {
        let statuses = S::fields()
            .iter()
            .map(|field| (*field, FieldStatus::Pristine))
            .collect();

        Self {
            values: defaults,
            statuses,
            mode,
            policy,
        }
    }

    pub fn values(&self) -> &S::Values {
        &self.values
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn policy(&self) -> PropagationPolicy {
        self.policy
    }

    pub fn status(&self, field: S::Field) -> FieldStatus {
        self.statuses.get(&field).cloned().unwrap_or_default()
    }

    /// Error currently displayed for `field`
    pub fn error(&self, field: S::Field) -> Option<&FieldError> {
        match self.statuses.get(&field) {
            Some(FieldStatus::Invalid(error)) => Some(error),
            _ => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.statuses
            .values()
            .any(|status| matches!(status, FieldStatus::Invalid(_)))
    }

    /// Apply a change to `field`. Returns true when the propagation policy wants
    /// the new values written out.
    pub fn change(&mut self, field: S::Field, update: impl FnOnce(&mut S::Values)) -> bool {
        update(&mut self.values);

        let verdict = S::validate_field(&self.values, field);
        match self.mode {
            ValidationMode::OnChange => self.record(field, verdict.clone()),
            ValidationMode::OnBlur => {
                let status = self.statuses.entry(field).or_default();
                if *status == FieldStatus::Pristine {
                    *status = FieldStatus::Touched;
                }
            }
        }

        match self.policy {
            PropagationPolicy::OptimisticWrite => true,
            PropagationPolicy::ValidatedWrite => verdict.is_ok(),
        }
    }

    /// Mark `field` invalid without touching its value, used when an input
    /// offers something the value type cannot hold
    pub fn reject(&mut self, field: S::Field, error: FieldError) {
        self.record(field, Err(error));
    }

    pub fn blur(&mut self, field: S::Field) {
        let verdict = S::validate_field(&self.values, field);
        self.record(field, verdict);
    }

    /// Check every field, updating all statuses
    pub fn validate(&mut self) -> Result<(), Vec<(S::Field, FieldError)>> {
        let mut failures = Vec::new();
        for field in S::fields() {
            let verdict = S::validate_field(&self.values, *field);
            if let Err(error) = &verdict {
                failures.push((*field, error.clone()));
            }
            self.record(*field, verdict);
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    fn record(&mut self, field: S::Field, verdict: Result<(), FieldError>) {
        let status = match verdict {
            Ok(()) => FieldStatus::Valid,
            Err(error) => FieldStatus::Invalid(error),
        };
        self.statuses.insert(field, status);
    }
}
