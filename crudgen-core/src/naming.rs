//! Identifier conversions for generated code.

/// Convert a snake_case identifier to camelCase or PascalCase.
///
/// Splits on `_` and title-cases every segment after the first: a letter
/// following a non-letter is upper-cased, every other letter lower-cased
/// (`sendDt` -> `Senddt`). With `capitalize_first` the first segment is
/// title-cased too; otherwise it is kept verbatim, so a single-segment
/// column such as `createDt` passes through unchanged.
///
/// Inputs are assumed to be well-formed identifiers: leading, trailing or
/// doubled underscores simply produce empty segments.
pub fn to_identifier(name: &str, capitalize_first: bool) -> String {
    let mut segments = name.split('_');
    let mut result = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        if capitalize_first {
            result.push_str(&title_case(first));
        } else {
            result.push_str(first);
        }
    }

    for segment in segments {
        result.push_str(&title_case(segment));
    }

    result
}

/// Convert a string to camelCase (e.g., "user_id" -> "userId")
pub fn to_camel_case(name: &str) -> String {
    to_identifier(name, false)
}

/// Convert a string to PascalCase (e.g., "user_id" -> "UserId")
pub fn to_pascal_case(name: &str) -> String {
    to_identifier(name, true)
}

/// Strip everything but word characters, for use as a file stem.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn title_case(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len());
    let mut after_letter = false;
    for c in segment.chars() {
        if after_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("user_id", false), "userId");
        assert_eq!(to_identifier("user_id", true), "UserId");
        assert_eq!(to_identifier("app_push_log", true), "AppPushLog");
        assert_eq!(to_identifier("id", false), "id");
        assert_eq!(to_identifier("id", true), "Id");
    }

    #[test]
    fn test_camel_case_keeps_first_segment() {
        assert_eq!(to_camel_case("createDt"), "createDt");
        assert_eq!(to_camel_case("USER_NAME"), "USERName");
    }

    #[test]
    fn test_later_segments_are_title_cased() {
        assert_eq!(to_camel_case("push_sendDt"), "pushSenddt");
        assert_eq!(to_camel_case("order_2nd_item"), "order2NdItem");
        assert_eq!(to_pascal_case("USER_NAME"), "UserName");
        assert_eq!(to_pascal_case("userAccount"), "Useraccount");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("USER_STATUS"), "USER_STATUS");
        assert_eq!(sanitize_file_stem("order-state (v2)"), "orderstatev2");
        assert_eq!(sanitize_file_stem("회원상태"), "회원상태");
    }
}
