//! Static help content, one table per operator kind.
//!
//! The template text is shown and copied verbatim. The `{{ }}` / `{% %}`
//! markers in it belong to the engine that runs the operators, nothing
//! here evaluates them.

/// one copyable template snippet. ids are unique within a kind.
pub struct PromptExample {
    pub id: &'static str,
    pub text: &'static str,
}

pub struct HelpContent {
    pub examples: &'static [PromptExample],
    pub schema_notes: &'static [&'static str],
}

pub(crate) const MAP: HelpContent = HelpContent {
    examples: &[
        PromptExample {
            id: "map-example",
            text: "Analyze the following document and list its key findings:\n\n{{ input }}",
        },
        PromptExample {
            id: "map-specific",
            text: "Summarize the following section in two sentences:\n\n{{ input.section_text }}",
        },
    ],
    schema_notes: &[
        "Each output column is appended to the document it was derived from.",
        "A schema of `summary: string` adds a summary field to every document.",
    ],
};

pub(crate) const FILTER: HelpContent = HelpContent {
    examples: &[
        PromptExample {
            id: "filter-example",
            text: "Decide whether the following document answers the stated question:\n\n{{ input }}\n\nAnswer with a single true or false.",
        },
        PromptExample {
            id: "filter-specific",
            text: "Keep this document only if the abstract reports primary results:\n\n{{ input.abstract }}",
        },
    ],
    schema_notes: &[
        "The output schema must reduce to exactly one boolean column, e.g. `keep_document: boolean`.",
        "Documents where that column is true are retained.",
    ],
};

pub(crate) const REDUCE: HelpContent = HelpContent {
    examples: &[
        PromptExample {
            id: "reduce-example",
            text: "Combine the findings of every document in this group:\n\n{% for input in inputs %}{{ input }}\n{% endfor %}",
        },
        PromptExample {
            id: "reduce-specific",
            text: "Merge the summaries below into one coherent analysis:\n\n{% for input in inputs %}- {{ input.summary }}\n{% endfor %}",
        },
    ],
    schema_notes: &[
        "The output schema describes one synthesized row per group.",
        "A schema of `combined_analysis: string` yields one analysis per group.",
    ],
};
