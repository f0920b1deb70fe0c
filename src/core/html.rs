// src/core/html.rs
//
// HTML → plain tables. Uses an error-recovering HTML5 parser, so "malformed"
// only ever means "no table survived parsing".
//
// Header precedence for a table:
//   1. first <thead> row
//   2. leading row made only of <th> cells
//   3. positional labels "0", "1", …
// Every other row with at least one cell is a data row, in document order.
// `colspan` repeats a cell across columns, `rowspan` carries it down into the
// following rows of the same row group. Tables that are hidden or hold no
// rows at all are skipped before "first table" is decided.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::ParseError;
use super::sanitize::normalize_ws;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("static selector"));

/// Elements whose start separates words even without surrounding whitespace.
const BREAKING: &[&str] = &["br", "p", "div", "li", "tr", "td", "th"];

/// One parsed table: header labels plus row cells (already whitespace-normalized).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the first column with exactly this label.
    pub fn column(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Cell text; `None` when the row is short or the column is missing.
    pub fn cell(&self, row: usize, col: Option<usize>) -> Option<&str> {
        let col = col?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.headers.is_empty() && self.rows.is_empty() }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section { Head, Body }

struct Row {
    section: Section,
    all_th: bool,
    cells: Vec<String>,
}

/// Every displayed table with at least one row, in document order.
/// Hidden tables (inline `display:none`, or inside one) don't count.
fn read_tables(html: &str) -> Result<Vec<RawTable>, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let doc = Html::parse_document(html);
    let mut shown = 0usize;
    let tables: Vec<RawTable> = doc
        .select(&TABLE)
        .filter(|t| !is_hidden_in_doc(*t))
        .inspect(|_| shown += 1)
        .map(read_table)
        .filter(|t| !t.is_empty())
        .collect();

    if tables.is_empty() {
        logd!("Extract: No usable table ({} displayed, all empty)", shown);
        return Err(if shown == 0 { ParseError::NoTable } else { ParseError::EmptyTable });
    }
    Ok(tables)
}

/// First usable table, plus how many usable tables the input held.
pub fn read_first_table(html: &str) -> Result<(RawTable, usize), ParseError> {
    let mut tables = read_tables(html)?;
    let found = tables.len();
    Ok((tables.swap_remove(0), found))
}

fn is_hidden(el: ElementRef<'_>) -> bool {
    el.value().attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        compact.contains("display:none")
    })
}

fn is_hidden_in_doc(el: ElementRef<'_>) -> bool {
    is_hidden(el) || el.ancestors().filter_map(ElementRef::wrap).any(is_hidden)
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let mut rows = Vec::new();
    let mut loose = Carry::default(); // <tr> directly under <table>

    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => push_row(&mut rows, child, Section::Body, &mut loose),
            "thead" => collect_rows(&mut rows, child, Section::Head),
            "tbody" | "tfoot" => collect_rows(&mut rows, child, Section::Body),
            _ => {}
        }
    }

    let header_ix = rows
        .iter()
        .position(|r| r.section == Section::Head)
        .or_else(|| rows.first().filter(|r| r.all_th).map(|_| 0));

    let mut headers = Vec::new();
    let mut body = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        if Some(i) == header_ix {
            headers = row.cells;
        } else if row.section == Section::Body {
            body.push(row.cells);
        }
    }

    if headers.is_empty() {
        let width = body.iter().map(Vec::len).max().unwrap_or(0);
        headers = (0..width).map(|i| i.to_string()).collect();
    }

    RawTable { headers, rows: body }
}

fn collect_rows(out: &mut Vec<Row>, group: ElementRef<'_>, section: Section) {
    // rowspan never crosses a thead/tbody/tfoot boundary
    let mut carry = Carry::default();
    for tr in group.children().filter_map(ElementRef::wrap) {
        if tr.value().name() == "tr" {
            push_row(out, tr, section, &mut carry);
        }
    }
}

/// Cells owed to following rows by a `rowspan`, by column: (text, rows left).
#[derive(Default)]
struct Carry(Vec<Option<(String, usize)>>);

impl Carry {
    fn take(&mut self, col: usize) -> Option<String> {
        let slot = self.0.get_mut(col)?;
        let (text, left) = slot.take()?;
        if left > 1 {
            *slot = Some((text.clone(), left - 1));
        }
        Some(text)
    }

    fn set(&mut self, col: usize, text: &str, rows: usize) {
        if self.0.len() <= col {
            self.0.resize(col + 1, None);
        }
        self.0[col] = Some((s!(text), rows));
    }

    fn pending_from(&self, col: usize) -> bool {
        self.0.iter().skip(col).any(Option::is_some)
    }
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 1)
        .unwrap_or(1)
}

fn fill_carried(cells: &mut Vec<String>, carry: &mut Carry) {
    while let Some(text) = carry.take(cells.len()) {
        cells.push(text);
    }
}

fn push_row(out: &mut Vec<Row>, tr: ElementRef<'_>, section: Section, carry: &mut Carry) {
    if is_hidden(tr) { return; }

    let mut cells = Vec::new();
    let mut own = 0usize;
    let mut all_th = true;

    for cell in tr.children().filter_map(ElementRef::wrap) {
        let name = cell.value().name();
        if name != "td" && name != "th" { continue; }
        if is_hidden(cell) { continue; }
        own += 1;
        all_th &= name == "th";

        fill_carried(&mut cells, carry);

        let text = cell_text(cell);
        let cols = span_attr(cell, "colspan");
        let rows = span_attr(cell, "rowspan");
        let start = cells.len();
        for _ in 0..cols {
            cells.push(text.clone());
        }
        if rows > 1 {
            for col in start..start + cols {
                carry.set(col, &text, rows - 1);
            }
        }
    }

    // rowspans reaching past this row's own cells
    if carry.pending_from(cells.len()) {
        while carry.pending_from(cells.len()) {
            let text = carry.take(cells.len()).unwrap_or_default();
            cells.push(text);
        }
    }

    if cells.is_empty() { return; }
    out.push(Row { section, all_th: own > 0 && all_th, cells });
}

/// Visible text of a cell. Line breaks and block starts count as spaces.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let mut buf = String::new();
    for node in cell.descendants().skip(1) {
        match node.value() {
            Node::Text(t) => buf.push_str(t),
            Node::Element(e) if BREAKING.contains(&e.name()) => buf.push(' '),
            _ => {}
        }
    }
    normalize_ws(&buf)
}
