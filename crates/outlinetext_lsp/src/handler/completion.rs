//! Markup snippet completion.

use tower_lsp::lsp_types::*;

/// Characters that open a completion request.
pub const TRIGGER_CHARACTERS: &[char] = &['[', '*', '#', '!'];

/// (label, snippet, detail)
const SNIPPETS: &[(&str, &str, &str)] = &[
    ("**bold**", "**${1:text}**", "Bold text"),
    ("//italic//", "//${1:text}//", "Italic text"),
    ("[link](url)", "[${1:text}](${2:url})", "Link"),
    ("![image](url)", "![${1:alt}](${2:url})", "Image"),
];

/// Handles the `textDocument/completion` request.
///
/// The same snippets are offered at every position.
pub async fn handle_completion(_params: CompletionParams) -> Option<CompletionResponse> {
    let items = SNIPPETS
        .iter()
        .map(|(label, snippet, detail)| CompletionItem {
            label: label.to_string(),
            kind: Some(CompletionItemKind::SNIPPET),
            detail: Some(detail.to_string()),
            insert_text: Some(snippet.to_string()),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        })
        .collect();

    Some(CompletionResponse::Array(items))
}
