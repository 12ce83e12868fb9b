/// Case-insensitive query highlighting that preserves the original text.

use regex::Regex;

pub struct Highlighter {
    re: Option<Regex>,
}

impl Highlighter {
    /// The query is matched literally, so regex metacharacters in user
    /// input are inert.
    pub fn new(query: &str) -> Self {
        let re = if query.is_empty() {
            None
        } else {
            Regex::new(&format!("(?i){}", regex::escape(query))).ok()
        };
        Self { re }
    }

    pub fn is_active(&self) -> bool {
        self.re.is_some()
    }

    /// Byte ranges of every occurrence of the query in `text`.
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        match &self.re {
            Some(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            None => Vec::new(),
        }
    }

    /// Split `text` into runs, tagging matched ones. Every run is a slice of
    /// the input with its casing intact, so concatenating the runs restores
    /// the original string exactly.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<(&'a str, bool)> {
        let mut out = Vec::new();
        let mut cursor = 0;
        for (start, end) in self.spans(text) {
            if start > cursor {
                out.push((&text[cursor..start], false));
            }
            out.push((&text[start..end], true));
            cursor = end;
        }
        if cursor < text.len() {
            out.push((&text[cursor..], false));
        }
        if out.is_empty() {
            out.push((text, false));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_preserve_original_casing() {
        let hl = Highlighter::new("nist");
        let text = "NIST CSF builds on nist guidance from NiSt";
        let spans = hl.spans(text);
        assert_eq!(spans.len(), 3);
        assert_eq!(&text[spans[0].0..spans[0].1], "NIST");
        assert_eq!(&text[spans[1].0..spans[1].1], "nist");
        assert_eq!(&text[spans[2].0..spans[2].1], "NiSt");
    }

    #[test]
    fn test_segments_reassemble_to_input() {
        let hl = Highlighter::new("sec");
        for text in [
            "Security section on SECRETS",
            "sec",
            "no hits here",
            "",
        ] {
            let rebuilt: String = hl.segments(text).iter().map(|(s, _)| *s).collect();
            assert_eq!(rebuilt, text);
        }
    }

    #[test]
    fn test_segments_tag_matches() {
        let hl = Highlighter::new("risk");
        let segs = hl.segments("Risk register and risk appetite");
        let marked: Vec<&str> = segs.iter().filter(|(_, m)| *m).map(|(s, _)| *s).collect();
        assert_eq!(marked, vec!["Risk", "risk"]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let hl = Highlighter::new("c++ (secure)");
        let segs = hl.segments("guide to c++ (secure) coding");
        assert!(segs.iter().any(|(s, m)| *m && *s == "c++ (secure)"));
    }

    #[test]
    fn test_empty_query_is_inert() {
        let hl = Highlighter::new("");
        assert!(!hl.is_active());
        assert_eq!(hl.segments("anything"), vec![("anything", false)]);
    }
}
