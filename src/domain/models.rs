use crate::cli::{TargetSyntax, WriteMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// On-disk config. Every key is optional; missing keys fall through to
/// the built-in defaults.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<TargetSyntax>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<WriteMode>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub syntax: TargetSyntax,
    pub mode: WriteMode,
}

#[derive(Debug, Serialize, Clone)]
pub struct TranscodeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub syntax: TargetSyntax,
    pub mode: WriteMode,
    pub entries: usize,
    pub bytes_written: u64,
    /// Entries passed through verbatim even though they contain `"`.
    pub unescaped_quotes: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct PreviewReport {
    pub name: String,
    pub syntax: TargetSyntax,
    pub entries: usize,
    pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QuotedEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub word: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct InspectReport {
    pub input: PathBuf,
    pub entries: usize,
    pub empty_entries: usize,
    pub unescaped_quotes: Vec<QuotedEntry>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ConfigInitReport {
    pub path: PathBuf,
    pub overwritten: bool,
}
