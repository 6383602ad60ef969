//! Strips model-added formatting artifacts from raw generation output
//! before structural parsing.

/// Removes ```json ... ``` style code fences from model output and trims
/// surrounding whitespace.
///
/// Handles zero, one, or multiple fence occurrences. Fence markers are only
/// recognized at the start/end of the trimmed text and on lines consisting
/// solely of a marker, so backticks inside legitimate string content are
/// left alone. Never fails; worst case returns the trimmed input unchanged.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.contains("```") {
        return trimmed.to_string();
    }

    let mut text = trimmed;
    // Opening fence, optionally tagged with a language name ("```json").
    if let Some(rest) = text.strip_prefix("```") {
        text = rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    if !text.contains("```") {
        return text.to_string();
    }

    // The model occasionally emits more than one fenced block: drop every
    // remaining line that is purely a fence marker.
    text.lines()
        .filter(|line| !is_fence_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_fence_line(line: &str) -> bool {
    line.trim()
        .strip_prefix("```")
        .map(|rest| rest.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_no_fences_returns_trimmed_input_unchanged() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_idempotent_on_already_stripped_text() {
        let once = strip_code_fences("```json\n{\"a\": 1}\n```");
        let twice = strip_code_fences(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unterminated_opening_fence() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_multiple_fenced_blocks() {
        let input = "```json\n{\"a\": 1}\n```\n```json\n{\"b\": 2}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}\n{\"b\": 2}");
    }

    #[test]
    fn test_backticks_inside_string_content_survive() {
        let input = "{\"note\": \"wrap snippets in ``` fences\"}";
        assert_eq!(strip_code_fences(input), input);
    }

    #[test]
    fn test_fence_on_same_line_as_content() {
        let input = "```json {\"key\": \"value\"} ```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }
}
