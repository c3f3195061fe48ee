//! Markdown rendering of batch results.

use std::fmt;

use crate::batch::{BookReport, Normalized, Outcome};
use crate::verify::ValidationError;

/// A whole batch, rendered as one Markdown document through `Display`.
pub struct Report<'a> {
    books: &'a [BookReport],
    top_n: usize,
    longest_k: usize,
}

impl<'a> Report<'a> {
    pub fn new(books: &'a [BookReport], top_n: usize, longest_k: usize) -> Self {
        Self {
            books,
            top_n,
            longest_k,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Preprocessing report")?;
        for book in self.books {
            self.write_book(f, book)?;
        }
        Ok(())
    }
}

impl Report<'_> {
    fn write_book(&self, f: &mut fmt::Formatter<'_>, book: &BookReport) -> fmt::Result {
        writeln!(f, "\n## Book: {}", book.name)?;
        writeln!(f, "\n### Source and parameters")?;
        writeln!(f, "* Source file: {}", book.source.display())?;
        match &book.params {
            None => writeln!(f, "* No parameters for {}, using defaults", book.name)?,
            Some(params) => {
                writeln!(f, "* Parameters:")?;
                for (flag, value) in params.flags() {
                    writeln!(f, "  * {flag}: {value}")?;
                }
            }
        }

        match &book.outcome {
            Outcome::LoadFailed(error) => {
                writeln!(f, "\nError: cannot read book ({error}), skipped")
            }
            Outcome::Failed {
                original_chars,
                error,
            } => {
                write_loaded(f, *original_chars)?;
                writeln!(f, "\nError: processing failed ({error})")
            }
            Outcome::Skipped(normalized) => {
                write_normalized(f, normalized)?;
                writeln!(f, "\nError: checks skipped (unknown language or empty text)")
            }
            Outcome::Processed {
                normalized,
                saved,
                top,
                longest,
                errors,
            } => {
                write_normalized(f, normalized)?;
                writeln!(f, "\n### 3. Saved")?;
                writeln!(f, "* {}", saved.display())?;
                self.write_statistics(f, top, longest)?;
                writeln!(f, "\n## Checks: {}", book.name)?;
                write_findings(f, errors)
            }
        }
    }

    fn write_statistics(
        &self,
        f: &mut fmt::Formatter<'_>,
        top: &[(String, usize)],
        longest: &[(String, usize)],
    ) -> fmt::Result {
        writeln!(
            f,
            "\n### 4. Top {} frequent and {} longest words",
            self.top_n, self.longest_k
        )?;
        writeln!(f, "\n* Top {} by frequency\n", self.top_n)?;
        write_table(f, "Frequency", top)?;
        writeln!(f, "\n* Top {} by length\n", self.longest_k)?;
        write_table(f, "Length", longest)
    }
}

fn write_findings(f: &mut fmt::Formatter<'_>, errors: &[ValidationError]) -> fmt::Result {
    if errors.is_empty() {
        return writeln!(f, "✅ All checks passed");
    }
    writeln!(f, "❌ Errors:")?;
    for error in errors {
        writeln!(f, "- {error}")?;
    }
    Ok(())
}

fn write_loaded(f: &mut fmt::Formatter<'_>, original_chars: usize) -> fmt::Result {
    writeln!(f, "\n### 1. Text loaded")?;
    writeln!(f, "* Length {original_chars} characters")
}

fn write_normalized(f: &mut fmt::Formatter<'_>, n: &Normalized) -> fmt::Result {
    write_loaded(f, n.original_chars)?;
    writeln!(f, "\n### 2. Preprocessing done")?;
    writeln!(
        f,
        "* Language: {}, processed length: {} characters",
        n.language, n.processed_chars
    )
}

fn write_table(f: &mut fmt::Formatter<'_>, column: &str, rows: &[(String, usize)]) -> fmt::Result {
    writeln!(f, "| Word | {column} |")?;
    writeln!(f, "|------|----------|")?;
    for (word, value) in rows {
        writeln!(f, "| {} | {value} |", word.replace('|', "\\|"))?;
    }
    Ok(())
}
