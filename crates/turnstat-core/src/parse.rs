use crate::error::FormatError;
use crate::types::Turn;

pub const SENTINEL_SPEAKER: &str = "USER";
pub const SENTINEL_TEXT: &str = "OVERALL";

/// Parse one `speaker<TAB>text<TAB>intent[<TAB>s1,s2,...]` line.
///
/// Malformed lines follow two different policies:
/// - fewer than three tab-separated fields is not a turn: `Ok(None)`, the
///   caller skips the line;
/// - a score token that is not an integer is a `FormatError`, which aborts
///   the whole read.
///
/// The line is trimmed before splitting, so leading or trailing tabs do not
/// produce fields. Fields after the fourth are ignored.
pub fn parse_line(line: &str) -> Result<Option<Turn>, FormatError> {
    let parts: Vec<&str> = line.trim().split('\t').collect();
    if parts.len() < 3 {
        return Ok(None);
    }

    let scores = match parts.get(3) {
        Some(field) => parse_scores(field)?,
        None => None,
    };

    Ok(Some(Turn {
        speaker: parts[0].trim().to_string(),
        text: parts[1].trim().to_string(),
        intent: parts[2].trim().to_string(),
        scores,
    }))
}

/// Parse a comma-separated score field. Empty tokens are ignored; an empty
/// result is `None`.
pub fn parse_scores(field: &str) -> Result<Option<Vec<i64>>, FormatError> {
    let mut scores = Vec::new();
    for token in field.trim().split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i64>().map_err(|source| FormatError {
            token: token.to_string(),
            source,
        })?;
        scores.push(value);
    }
    Ok(if scores.is_empty() { None } else { Some(scores) })
}

/// Exact, case-sensitive boundary check.
pub fn is_sentinel(turn: &Turn) -> bool {
    turn.speaker == SENTINEL_SPEAKER && turn.text == SENTINEL_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_fields_without_scores() {
        let t = parse_line("SYSTEM\tHello there\tOTHER").unwrap().unwrap();
        assert_eq!(t.speaker, "SYSTEM");
        assert_eq!(t.text, "Hello there");
        assert_eq!(t.intent, "OTHER");
        assert_eq!(t.scores, None);
    }

    #[test]
    fn parse_trims_fields_and_scores() {
        let t = parse_line("USER   \t  I like comedies.  \tENTITY_NAME  \t 3, 3 ,4,4 ")
            .unwrap()
            .unwrap();
        assert_eq!(t.speaker, "USER");
        assert_eq!(t.text, "I like comedies.");
        assert_eq!(t.intent, "ENTITY_NAME");
        assert_eq!(t.scores, Some(vec![3, 3, 4, 4]));
    }

    #[test]
    fn two_fields_is_not_a_turn() {
        assert_eq!(parse_line("USER\tonly two").unwrap(), None);
        assert_eq!(parse_line("no tabs at all").unwrap(), None);
    }

    #[test]
    fn leading_tab_is_trimmed_before_split() {
        // The empty leading field disappears with the trim, leaving two fields.
        assert_eq!(parse_line("\ttext\tOTHER").unwrap(), None);
    }

    #[test]
    fn empty_score_field_is_absent() {
        let t = parse_line("SYSTEM\tok\tOTHER\t   ").unwrap().unwrap();
        assert_eq!(t.scores, None);
        let t = parse_line("SYSTEM\tok\tOTHER\t , ,").unwrap().unwrap();
        assert_eq!(t.scores, None);
    }

    #[test]
    fn duplicates_and_signs_are_kept_in_order() {
        let t = parse_line("USER\tx\tOTHER\t5,5,-1,+2").unwrap().unwrap();
        assert_eq!(t.scores, Some(vec![5, 5, -1, 2]));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let t = parse_line("USER\tx\tOTHER\t1\tjunk").unwrap().unwrap();
        assert_eq!(t.scores, Some(vec![1]));
    }

    #[test]
    fn bad_score_token_is_format_error() {
        let err = parse_line("USER\tx\tOTHER\t3,four").unwrap_err();
        assert_eq!(err.token, "four");
        assert!(err.to_string().contains("four"));
    }

    #[test]
    fn sentinel_is_exact_match() {
        let s = parse_line("USER\tOVERALL\tOTHER\t5").unwrap().unwrap();
        assert!(is_sentinel(&s));
        let lower = parse_line("USER\toverall\tOTHER").unwrap().unwrap();
        assert!(!is_sentinel(&lower));
        let system = parse_line("SYSTEM\tOVERALL\tOTHER").unwrap().unwrap();
        assert!(!is_sentinel(&system));
    }
}
