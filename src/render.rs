// SPDX-License-Identifier: MIT
//
// Text rendering for the palette and document.
//
// This is the adapter half of the palette: the core hands over a
// PaletteView, and this module turns it into lines of text. Nothing here
// feeds back into palette state; clicks come in through script commands
// that look items up in the same view.
//
//   @ 28,40
//   [😀] 🐶  🍎  ❤   ⚽  🚗  💡  🏁
//   > type to search
//   😀 😃 😄 😁 😆 😅 😂 🤣
//   ...
//   (50 emoji)

use unicode_width::UnicodeWidthStr;

use emoji_host::Document;
use emoji_palette::PaletteView;

/// Emoji per grid row.
pub const ROW_LEN: usize = 8;

/// Cell width each label is padded to.
const CELL: usize = 2;

/// Pad `label` with spaces to `CELL` display columns.
fn pad(label: &str) -> String {
    let width = label.width();
    let mut out = label.to_string();
    for _ in width..CELL {
        out.push(' ');
    }
    out
}

/// Render an open palette as lines.
#[must_use]
pub fn palette_lines(view: &PaletteView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("@ {},{}", view.placement.top, view.placement.left));

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", pad(t.label))
            } else {
                format!(" {} ", pad(t.label))
            }
        })
        .collect();
    lines.push(tabs.concat().trim_end().to_string());

    if view.query.is_empty() {
        lines.push("> type to search".to_string());
    } else {
        lines.push(format!("> {}", view.query));
    }

    for row in view.items.chunks(ROW_LEN) {
        let cells: Vec<String> = row.iter().map(|i| pad(&i.label)).collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.push(format!("({} emoji)", view.items.len()));
    lines
}

/// Render the document with a `|` at the caret.
#[must_use]
pub fn document_line(doc: &Document, caret: Option<usize>) -> String {
    let len = doc.len_chars();
    match caret {
        Some(caret) => {
            let caret = caret.min(len);
            format!("{}|{}", doc.text_range(0..caret), doc.text_range(caret..len))
        }
        None => doc.text(),
    }
}
