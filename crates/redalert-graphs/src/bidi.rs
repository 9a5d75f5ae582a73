//! Visual ordering for right-to-left labels
//!
//! Neither the bitmap backend nor the terminal applies the bidirectional
//! algorithm, so Hebrew and Arabic labels are reordered before drawing.

use unicode_bidi::BidiInfo;

/// Reorder a logical-order label into left-to-right visual order
pub fn visual_order(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(label, None);
    if !info.has_rtl() {
        return label.to_string();
    }

    info.paragraphs
        .iter()
        .map(|para| info.reorder_line(para, para.range.clone()).into_owned())
        .collect::<Vec<_>>()
        .join("")
}
