//! Text extraction from source documents.
//!
//! The search core only needs "path in, text out". The default
//! implementation opens PDFs with `lopdf` and runs `pdf-extract`'s
//! text output over the first `max_pages` pages only, so a very long
//! document costs no more than its capped prefix. Tests and embedders
//! can plug in their own [`TextExtractor`].

use crate::core::error::{IlmifyError, Result};
use lopdf::Document;
use pdf_extract::PlainTextOutput;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

/// Source of raw document text.
pub trait TextExtractor: Send + Sync {
    /// Extract the text of at most `max_pages` pages.
    ///
    /// Unreadable or corrupt input is reported as
    /// [`IlmifyError::Extraction`]; it must never panic.
    fn extract_text(&self, path: &Path, max_pages: usize) -> Result<String>;
}

thread_local! {
    /// Set while this thread is inside the PDF parser
    static IN_PARSER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Route parser panics to the log instead of the default stderr report.
///
/// Panics on other threads, or outside the parser, still reach the
/// previously installed hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_PARSER.with(Cell::get) {
                tracing::debug!("PDF parser panicked: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Clears the in-parser flag, also when unwinding
struct ParserScope;

impl ParserScope {
    fn enter() -> Self {
        IN_PARSER.with(|flag| flag.set(true));
        ParserScope
    }
}

impl Drop for ParserScope {
    fn drop(&mut self) {
        IN_PARSER.with(|flag| flag.set(false));
    }
}

/// PDF extractor backed by `lopdf` and `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path, max_pages: usize) -> Result<String> {
        install_quiet_hook();

        // pdf-extract panics on some malformed files
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _scope = ParserScope::enter();
            read_pages(path, max_pages)
        }));

        let (pages, total_pages) = match outcome {
            Ok(Ok(read)) => read,
            Ok(Err(message)) => {
                return Err(IlmifyError::Extraction {
                    path: path.to_path_buf(),
                    message,
                })
            }
            Err(_) => {
                tracing::warn!("PDF parser panicked on {:?}", path);
                return Err(IlmifyError::Extraction {
                    path: path.to_path_buf(),
                    message: "PDF parser panicked".to_string(),
                });
            }
        };

        let read_pages = pages.len();
        let text = join_pages(pages);

        tracing::debug!(
            "Extracted {} chars from {:?} ({} of {} pages)",
            text.chars().count(),
            path,
            read_pages,
            total_pages
        );

        Ok(text)
    }
}

/// Text of the first `max_pages` pages, plus the document's page count.
///
/// Only the capped pages are decoded. A page whose content cannot be
/// interpreted contributes no text.
fn read_pages(
    path: &Path,
    max_pages: usize,
) -> std::result::Result<(Vec<String>, usize), String> {
    let mut doc = Document::load(path).map_err(|e| e.to_string())?;
    if doc.is_encrypted() {
        // Many "protected" PDFs use an empty user password
        doc.decrypt("").map_err(|e| e.to_string())?;
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let total_pages = page_numbers.len();

    let mut pages = Vec::with_capacity(total_pages.min(max_pages));
    for page_num in page_numbers.into_iter().take(max_pages) {
        let mut text = String::new();
        let rendered = {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(&doc, &mut output, page_num)
        };
        match rendered {
            Ok(()) => pages.push(text),
            Err(e) => tracing::debug!("Skipping page {} of {:?}: {}", page_num, path, e),
        }
    }

    Ok((pages, total_pages))
}

/// Join the non-blank pages with blank lines
fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
