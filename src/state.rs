//! Structural state threaded through one scan
//!
//! All counters and stacks the scanner needs live in a single [`ParseState`]
//! record passed by exclusive reference into tag processing. Nothing here
//! survives across invocations, which is what keeps the converter itself
//! stateless and reentrant.

use crate::diagnostics::ConversionFault;
use crate::LINE_BREAK;

/// Kind of the enclosing list, tracked per nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Per-table parse state, reset when a new `table` open tag is seen
#[derive(Debug, Default)]
pub struct TableState {
    /// Columns counted from `th` cells of the header row
    pub column_count: usize,
    /// Whether the Markdown separator row has already been emitted
    pub header_processed: bool,
    /// Whether the scan is currently inside a `thead` section
    pub in_header: bool,
}

/// Mutable scan state: list nesting, blockquote depth, table progress, and
/// the ignored-content region flag
#[derive(Debug, Default)]
pub struct ParseState {
    /// Parent list kinds, innermost last; depth equals the indent level
    pub list_stack: Vec<ListKind>,
    /// Current list indentation level
    pub list_indent_level: usize,
    /// Set on each list open so the first `li` emits a leading line break
    pub first_list_item: bool,
    /// Blockquote nesting; signed because unmatched closes drive it below
    /// zero, which only faults once a prefix emission needs the value
    pub blockquote_depth: i32,
    /// True while inside an ignore-listed container
    pub ignore_content: bool,
    /// State for the table currently being scanned
    pub table: TableState,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a list: bump the indent, remember the kind, arm the
    /// first-item flag
    pub fn open_list(&mut self, kind: ListKind) {
        self.list_indent_level += 1;
        self.list_stack.push(kind);
        self.first_list_item = true;
    }

    /// Leave a list. An empty stack means the input closed a list it never
    /// opened; that is an internal fault and the scan aborts.
    pub fn close_list(&mut self) -> Result<(), ConversionFault> {
        if self.list_stack.pop().is_none() {
            return Err(ConversionFault::ListUnderflow);
        }
        self.list_indent_level -= 1;
        Ok(())
    }

    /// Kind governing the next list item; an empty stack falls back to
    /// unordered
    pub fn current_list_kind(&self) -> ListKind {
        self.list_stack.last().copied().unwrap_or(ListKind::Unordered)
    }

    /// Blockquote depth as a repeat count for `>` prefixes. Negative depth
    /// at emission time is an internal fault.
    pub fn blockquote_repeat(&self) -> Result<usize, ConversionFault> {
        usize::try_from(self.blockquote_depth).map_err(|_| ConversionFault::QuoteUnderflow)
    }

    /// Apply one table-family tag event to the output buffer.
    ///
    /// Drives the pipe-table algorithm: `th` cells of the header row set the
    /// column count, and the separator row is emitted exactly once, either
    /// when the first header-bearing row closes or when an explicit `thead`
    /// closes, whichever comes first.
    pub fn process_table_tag(&mut self, name: &str, is_closing: bool, out: &mut String) {
        match name {
            "table" => {
                if !is_closing {
                    self.table.column_count = 0;
                    self.table.header_processed = false;
                }
                // Line break both before a new table and after a finished one
                out.push_str(LINE_BREAK);
            }
            "tr" => {
                if is_closing {
                    if !self.table.header_processed && self.table.column_count > 0 {
                        out.push('|');
                        out.push_str(LINE_BREAK);
                        out.push('|');
                        for _ in 0..self.table.column_count {
                            out.push_str(" --- |");
                        }
                        out.push_str(LINE_BREAK);
                        self.table.header_processed = true;
                    } else {
                        out.push('|');
                        out.push_str(LINE_BREAK);
                    }
                }
            }
            "th" => {
                if !is_closing {
                    if self.table.in_header || !self.table.header_processed {
                        self.table.column_count += 1;
                    }
                    out.push_str("| ");
                }
            }
            "td" => {
                if !is_closing {
                    out.push_str("| ");
                }
            }
            "thead" => {
                if !is_closing {
                    self.table.in_header = true;
                } else if self.table.in_header {
                    if !self.table.header_processed && self.table.column_count > 0 {
                        out.push('|');
                        for _ in 0..self.table.column_count {
                            out.push_str(" --- |");
                        }
                        out.push_str(LINE_BREAK);
                        self.table.header_processed = true;
                    }
                    self.table.in_header = false;
                }
            }
            // tbody carries no emission of its own
            _ => {}
        }
    }
}
