use corkboard_core::CorkboardResult;
use corkboard_domain::Board;

/// Strip the Markdown code fence LLMs like to wrap JSON in: a leading
/// ```` ```json ```` (any case) or bare ```` ``` ````, and a trailing
/// ```` ``` ````.
pub fn clean_fenced_json(raw: &str) -> &str {
    let mut s = raw.trim();
    if s.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("```json")) {
        s = s[7..].trim_start();
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }
    s
}

/// Decode a generated template into a board: unfence, then parse as an
/// array of columns (missing task lists normalize to empty).
pub fn board_from_response(raw: &str) -> CorkboardResult<Board> {
    Board::from_json_str(clean_fenced_json(raw))
}
