use super::*;

// =============================================================
// placeholder_ref / avatar_ref / banner_ref
// =============================================================

#[test]
fn empty_query_yields_bare_default_reference() {
    assert_eq!(placeholder_ref(100, 100, ""), "/placeholder.svg?height=100&width=100");
    assert_eq!(avatar_ref(""), "/placeholder.svg?height=100&width=100");
    assert_eq!(banner_ref(""), "/placeholder.svg?height=200&width=1200");
}

#[test]
fn non_empty_query_is_appended_encoded() {
    assert_eq!(
        avatar_ref("cool rapper cartoon"),
        "/placeholder.svg?height=100&width=100&query=cool%20rapper%20cartoon"
    );
    assert_eq!(
        banner_ref("rap concert stage"),
        "/placeholder.svg?height=200&width=1200&query=rap%20concert%20stage"
    );
}

// =============================================================
// query_of
// =============================================================

#[test]
fn query_of_extracts_everything_after_the_marker() {
    assert_eq!(
        query_of("/placeholder.svg?height=100&width=100&query=neon%20mic"),
        Some("neon%20mic")
    );
}

#[test]
fn query_of_is_none_for_bare_references() {
    assert_eq!(query_of("/placeholder.svg?height=100&width=100"), None);
}

// =============================================================
// encode_query
// =============================================================

#[test]
fn encode_leaves_unreserved_characters_alone() {
    assert_eq!(encode_query("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_escapes_spaces_and_separators() {
    assert_eq!(encode_query("a b&c=d"), "a%20b%26c%3Dd");
}

#[test]
fn encode_escapes_utf8_per_byte() {
    assert_eq!(encode_query("café"), "caf%C3%A9");
}

// =============================================================
// decode_query
// =============================================================

#[test]
fn decode_reverses_encode() {
    for text in ["cool rapper cartoon", "a b&c=d", "café", "100% pun"] {
        assert_eq!(decode_query(&encode_query(text)), text);
    }
}

#[test]
fn decode_passes_malformed_escapes_through() {
    assert_eq!(decode_query("50%"), "50%");
    assert_eq!(decode_query("%zz"), "%zz");
}
