use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// shorten a line to `width` terminal columns, grapheme by grapheme, with
/// an ellipsis when anything was dropped.
pub(super) trait Fit {
    fn fit_width(&self, width: usize) -> String;
}

impl Fit for str {
    fn fit_width(&self, width: usize) -> String {
        if self.width_cjk() <= width {
            return self.to_owned();
        }
        let mut out = String::new();
        let mut used = 0usize;
        for grapheme in self.graphemes(true) {
            let next = used + grapheme.width_cjk();
            if next + 1 > width {
                break;
            }
            out.push_str(grapheme);
            used = next;
        }
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Fit;

    #[test]
    fn short_line_unchanged() {
        assert_eq!("keep_document", "keep_document".fit_width(20));
    }

    #[test]
    fn exact_width_unchanged() {
        assert_eq!("{{ input }}", "{{ input }}".fit_width(11));
    }

    #[test]
    fn long_line_shortened() {
        let input = "like a rolling stone";
        assert_eq!("like a …", input.fit_width(8));
    }

    #[test]
    fn cjk_line_shortened() {
        let input = "蓬鬆奇風鳥是補充包";
        assert_eq!("蓬鬆奇風…", input.fit_width(10));
    }
}
