use serde::{Deserialize, Serialize};

mod content;
mod error;

pub use content::{HelpContent, PromptExample};
pub use error::{Error, Result};

/// documentation lives under one page per operator.
const DOC_BASE: &str = "https://ucbepic.github.io/docetl/operators/";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Map,
    Filter,
    Reduce,
    /// anything we do not recognize. keeps the raw spelling so the
    /// documentation link can still be built from it.
    Other(String),
}

impl OperationKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "map" => Self::Map,
            "filter" => Self::Filter,
            "reduce" => Self::Reduce,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Reduce => "reduce",
            Self::Other(raw) => raw,
        }
    }

    /// not validated. an unrecognized kind yields a link nobody answers.
    pub fn doc_url(&self) -> String {
        format!("{}{}/", DOC_BASE, self.as_str())
    }

    pub fn help(&self) -> Option<&'static HelpContent> {
        match self {
            Self::Map => Some(&content::MAP),
            Self::Filter => Some(&content::FILTER),
            Self::Reduce => Some(&content::REDUCE),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OperationKind;

    fn ids(kind: &OperationKind) -> Vec<&'static str> {
        kind.help()
            .map(|help| help.examples.iter().map(|example| example.id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(OperationKind::Map, OperationKind::parse("Map"));
        assert_eq!(OperationKind::Reduce, OperationKind::parse(" reduce "));
        assert_eq!(OperationKind::Other("sort".to_owned()), OperationKind::parse("sort"));
    }

    #[test]
    fn every_kind_has_its_example_blocks() {
        assert_eq!(vec!["map-example", "map-specific"], ids(&OperationKind::Map));
        assert_eq!(vec!["filter-example", "filter-specific"], ids(&OperationKind::Filter));
        assert_eq!(vec!["reduce-example", "reduce-specific"], ids(&OperationKind::Reduce));
    }

    #[test]
    fn unknown_kind_has_none() {
        let kind = OperationKind::parse("sort");
        assert!(kind.help().is_none());
        assert!(ids(&kind).is_empty());
    }

    #[test]
    fn doc_url_substitutes_the_kind() {
        assert_eq!(
            "https://ucbepic.github.io/docetl/operators/reduce/",
            OperationKind::Reduce.doc_url()
        );
        assert_eq!(
            "https://ucbepic.github.io/docetl/operators/sort/",
            OperationKind::parse("sort").doc_url()
        );
    }

    #[test]
    fn reduce_templates_iterate_the_group() {
        for example in OperationKind::Reduce.help().unwrap().examples {
            assert!(example.text.contains("{% for input in inputs %}"));
        }
    }
}
