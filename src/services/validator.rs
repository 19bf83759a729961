// src/services/validator.rs
use std::fmt;

use thiserror::Error;

pub const MAX_MESSAGE_CHARS: usize = 1000;

const FORBIDDEN_WORDS: [&str; 2] = ["spam", "hack"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Campo obrigatório ausente")]
    MissingField,
    #[error("Mensagem não pode estar vazia ou conter apenas espaços")]
    EmptyMessage,
    #[error("Mensagem deve conter pelo menos um caractere alfanumérico")]
    NoAlphanumericContent,
    #[error("Mensagem muito longa (máximo {max} caracteres, recebidos {len})")]
    TooLong { len: usize, max: usize },
    #[error("Mensagem contém conteúdo proibido")]
    ForbiddenContent,
}

impl ValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        "message"
    }

    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Wording reported by the manual-validation endpoint.
    pub fn manual_reason(&self) -> String {
        match self {
            ValidationError::EmptyMessage => "Mensagem não pode estar vazia".to_string(),
            ValidationError::TooLong { max, .. } => {
                format!("Mensagem muito longa (máximo {max} caracteres)")
            }
            other => other.to_string(),
        }
    }
}

/// A message that passed validation: trimmed, non-empty, within bounds and
/// carrying at least one alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanMessage(String);

impl CleanMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for CleanMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rule sees the raw input and its trimmed form.
type Rule = fn(raw: &str, trimmed: &str) -> Result<(), ValidationError>;

// The length bound runs first so an oversized input is rejected whatever it holds.
const RULES: &[Rule] = &[within_length, not_empty, has_alphanumeric];

// The manual path strips first and bounds the trimmed text.
const MANUAL_RULES: &[Rule] = &[not_empty, trimmed_within_length, has_alphanumeric, no_forbidden_words];

fn within_length(raw: &str, _trimmed: &str) -> Result<(), ValidationError> {
    let len = raw.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong { len, max: MAX_MESSAGE_CHARS });
    }
    Ok(())
}

fn trimmed_within_length(_raw: &str, trimmed: &str) -> Result<(), ValidationError> {
    within_length(trimmed, trimmed)
}

fn not_empty(_raw: &str, trimmed: &str) -> Result<(), ValidationError> {
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(())
}

fn has_alphanumeric(_raw: &str, trimmed: &str) -> Result<(), ValidationError> {
    if !trimmed.chars().any(char::is_alphanumeric) {
        return Err(ValidationError::NoAlphanumericContent);
    }
    Ok(())
}

fn no_forbidden_words(_raw: &str, trimmed: &str) -> Result<(), ValidationError> {
    let lower = trimmed.to_lowercase();
    if FORBIDDEN_WORDS.iter().any(|w| lower.contains(w)) {
        return Err(ValidationError::ForbiddenContent);
    }
    Ok(())
}

fn run_rules(rules: &[Rule], raw: &str) -> Result<CleanMessage, ValidationError> {
    let trimmed = raw.trim();
    for rule in rules {
        rule(raw, trimmed)?;
    }
    Ok(CleanMessage(trimmed.to_string()))
}

pub fn validate(raw: &str) -> Result<CleanMessage, ValidationError> {
    run_rules(RULES, raw)
}

/// Like [`validate`], with an absent field reported as `MissingField`.
pub fn validate_field(raw: Option<&str>) -> Result<CleanMessage, ValidationError> {
    validate(raw.ok_or(ValidationError::MissingField)?)
}

/// Stricter pipeline used by the manual-validation endpoint: the standard
/// rules plus a forbidden-word check.
pub fn validate_manual(raw: Option<&str>) -> Result<CleanMessage, ValidationError> {
    run_rules(MANUAL_RULES, raw.ok_or(ValidationError::MissingField)?)
}
