use crate::cli::WriteMode;
use crate::domain::models::{InspectReport, QuotedEntry, Settings, TranscodeReport};
use crate::services::syntax::render_declaration;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TranscodeError {
    #[error("input not found: {}", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("input unreadable: {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("output not writable: {}", .path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranscodeError {
    pub fn code(&self) -> &'static str {
        match self {
            TranscodeError::InputNotFound { .. } => "INPUT_NOT_FOUND",
            TranscodeError::InputUnreadable { .. } => "INPUT_UNREADABLE",
            TranscodeError::OutputNotWritable { .. } => "OUTPUT_NOT_WRITABLE",
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits on every Unicode line boundary (`\r\n` counts once). A final
/// terminator does not produce an extra empty record.
pub fn split_records(raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = raw;
    while !rest.is_empty() {
        let Some(i) = rest.find(is_line_break) else {
            out.push(rest.to_string());
            break;
        };
        out.push(rest[..i].to_string());
        let tail = &rest[i..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
    }
    out
}

/// Reads the whole input and splits it into records.
pub fn read_words(path: &Path) -> Result<Vec<String>, TranscodeError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            TranscodeError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TranscodeError::InputUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(split_records(&raw))
}

/// Writes `text` to `path`, creating the file when missing. The handle is
/// dropped on return, including on the error path.
pub fn write_declaration(path: &Path, mode: WriteMode, text: &str) -> Result<u64, TranscodeError> {
    let not_writable = |e: std::io::Error| TranscodeError::OutputNotWritable {
        path: path.to_path_buf(),
        source: e,
    };

    let mut opts = OpenOptions::new();
    opts.create(true);
    match mode {
        WriteMode::Append => opts.append(true),
        WriteMode::Overwrite => opts.write(true).truncate(true),
    };
    let file = opts.open(path).map_err(not_writable)?;

    let mut w = BufWriter::new(file);
    w.write_all(text.as_bytes()).map_err(not_writable)?;
    w.flush().map_err(not_writable)?;
    Ok(text.len() as u64)
}

fn quoted_entries(words: &[String]) -> Vec<QuotedEntry> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.contains('"'))
        .map(|(i, w)| QuotedEntry {
            line: i + 1,
            word: w.clone(),
        })
        .collect()
}

pub fn transcode(settings: &Settings) -> Result<TranscodeReport, TranscodeError> {
    log::debug!(
        "transcode {} -> {} as {} ({}, {})",
        settings.input.display(),
        settings.output.display(),
        settings.name,
        settings.syntax,
        settings.mode
    );

    let words = read_words(&settings.input)?;
    let quoted = quoted_entries(&words);
    for q in &quoted {
        log::warn!(
            "line {} contains an unescaped quote, emitted verbatim: {}",
            q.line,
            q.word
        );
    }

    let text = render_declaration(&settings.name, &words, settings.syntax);
    let bytes_written = write_declaration(&settings.output, settings.mode, &text)?;

    log::info!(
        "wrote {} entries ({} bytes) to {}",
        words.len(),
        bytes_written,
        settings.output.display()
    );

    Ok(TranscodeReport {
        input: settings.input.clone(),
        output: settings.output.clone(),
        name: settings.name.clone(),
        syntax: settings.syntax,
        mode: settings.mode,
        entries: words.len(),
        bytes_written,
        unescaped_quotes: quoted.len(),
    })
}

pub fn inspect(input: &Path) -> Result<InspectReport, TranscodeError> {
    let words = read_words(input)?;
    Ok(InspectReport {
        input: input.to_path_buf(),
        entries: words.len(),
        empty_entries: words.iter().filter(|w| w.is_empty()).count(),
        unescaped_quotes: quoted_entries(&words),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TargetSyntax;
    use std::fs;
    use tempfile::TempDir;

    fn settings(dir: &TempDir, mode: WriteMode) -> Settings {
        Settings {
            input: dir.path().join("words.txt"),
            output: dir.path().join("words.js"),
            name: "colors".to_string(),
            syntax: TargetSyntax::Js,
            mode,
        }
    }

    #[test]
    fn trailing_newline_adds_no_record() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "red\ngreen\nblue\n").expect("write input");
        assert_eq!(read_words(&p).expect("read"), vec!["red", "green", "blue"]);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "red\r\ngreen\r\n").expect("write input");
        assert_eq!(read_words(&p).expect("read"), vec!["red", "green"]);
    }

    #[test]
    fn lone_carriage_returns_split_records() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "red\rgreen\rblue\r").expect("write input");
        assert_eq!(read_words(&p).expect("read"), vec!["red", "green", "blue"]);
    }

    #[test]
    fn unicode_line_separators_split_records() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "red\u{2028}green\u{85}blue\u{0c}").expect("write input");
        assert_eq!(read_words(&p).expect("read"), vec!["red", "green", "blue"]);
    }

    #[test]
    fn blank_records_survive_splitting() {
        assert_eq!(split_records("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_records("a\r\n\r\nb\r\n"), vec!["a", "", "b"]);
        assert_eq!(split_records("\n"), vec![""]);
        assert!(split_records("").is_empty());
    }

    #[test]
    fn empty_file_has_no_records() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "").expect("write input");
        assert!(read_words(&p).expect("read").is_empty());
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = TempDir::new().expect("temp dir");
        let err = read_words(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, TranscodeError::InputNotFound { .. }));
        assert_eq!(err.code(), "INPUT_NOT_FOUND");
    }

    #[test]
    fn directory_input_is_unreadable() {
        let dir = TempDir::new().expect("temp dir");
        let err = read_words(dir.path()).unwrap_err();
        assert!(matches!(err, TranscodeError::InputUnreadable { .. }));
    }

    #[test]
    fn invalid_utf8_input_is_unreadable() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Append);
        fs::write(&s.input, b"ok\n\xff\xfe\n").expect("write input");

        let err = transcode(&s).unwrap_err();
        assert!(matches!(err, TranscodeError::InputUnreadable { .. }));
        assert_eq!(err.code(), "INPUT_UNREADABLE");
        assert!(!s.output.exists());
    }

    #[test]
    fn append_accumulates_runs() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Append);
        fs::write(&s.input, "red\ngreen\nblue\n").expect("write input");

        let first = transcode(&s).expect("first run");
        transcode(&s).expect("second run");

        let one = "const colors = [\n\"red\",\n\"green\",\n\"blue\",\n];\n";
        let out = fs::read_to_string(&s.output).expect("read output");
        assert_eq!(out, format!("{one}{one}"));
        assert_eq!(first.entries, 3);
        assert_eq!(first.bytes_written, one.len() as u64);
    }

    #[test]
    fn append_preserves_existing_content() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Append);
        fs::write(&s.input, "a\n").expect("write input");
        fs::write(&s.output, "// header\n").expect("seed output");

        transcode(&s).expect("run");
        let out = fs::read_to_string(&s.output).expect("read output");
        assert_eq!(out, "// header\nconst colors = [\n\"a\",\n];\n");
    }

    #[test]
    fn overwrite_replaces_existing_content() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Overwrite);
        fs::write(&s.input, "a\n").expect("write input");
        fs::write(&s.output, "stale content that is longer than the new one\n")
            .expect("seed output");

        transcode(&s).expect("run");
        let out = fs::read_to_string(&s.output).expect("read output");
        assert_eq!(out, "const colors = [\n\"a\",\n];\n");
    }

    #[test]
    fn missing_input_leaves_output_untouched() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Append);
        let err = transcode(&s).unwrap_err();
        assert!(matches!(err, TranscodeError::InputNotFound { .. }));
        assert!(!s.output.exists());
    }

    #[test]
    fn output_in_missing_directory_is_not_writable() {
        let dir = TempDir::new().expect("temp dir");
        let mut s = settings(&dir, WriteMode::Append);
        fs::write(&s.input, "a\n").expect("write input");
        s.output = dir.path().join("missing/words.js");
        let err = transcode(&s).unwrap_err();
        assert_eq!(err.code(), "OUTPUT_NOT_WRITABLE");
    }

    #[test]
    fn quoted_words_are_counted_not_escaped() {
        let dir = TempDir::new().expect("temp dir");
        let s = settings(&dir, WriteMode::Append);
        fs::write(&s.input, "ok\nfoo\"bar\n").expect("write input");

        let report = transcode(&s).expect("run");
        assert_eq!(report.unescaped_quotes, 1);
        let out = fs::read_to_string(&s.output).expect("read output");
        assert!(out.contains("\"foo\"bar\",\n"));
    }

    #[test]
    fn inspect_reports_blank_and_quoted_lines() {
        let dir = TempDir::new().expect("temp dir");
        let p = dir.path().join("w.txt");
        fs::write(&p, "a\n\nsay \"hi\"\n").expect("write input");

        let r = inspect(&p).expect("inspect");
        assert_eq!(r.entries, 3);
        assert_eq!(r.empty_entries, 1);
        assert_eq!(
            r.unescaped_quotes,
            vec![QuotedEntry {
                line: 3,
                word: "say \"hi\"".to_string()
            }]
        );
    }
}
