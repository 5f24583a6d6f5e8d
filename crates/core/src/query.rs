//! Operation-name extraction from parsed GraphQL documents.
//!
//! Query documents arrive already parsed and validated by the GraphQL
//! layer; the cache only ever needs the name of the operation a
//! document contains.

pub use cynic_parser::{parse_executable_document, ExecutableDocument};

/// Returns the name of a document's first operation definition.
///
/// Fragment definitions are skipped when locating the operation.
/// Returns `None` when the document has no operation definitions or
/// when the first operation is unnamed (shorthand form).
///
/// # Examples
///
/// ```
/// use linkfeed_core::query::{operation_name, parse_executable_document};
///
/// let document = parse_executable_document("query FeedQuery { feed { id } }").unwrap();
/// assert_eq!(operation_name(&document), Some("FeedQuery"));
///
/// let shorthand = parse_executable_document("{ feed { id } }").unwrap();
/// assert_eq!(operation_name(&shorthand), None);
/// ```
pub fn operation_name(document: &ExecutableDocument) -> Option<&str> {
    document
        .operations()
        .next()
        .and_then(|operation| operation.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_query() {
        let document =
            parse_executable_document("query FeedQuery($first: Int) { feed { id url } }").unwrap();
        assert_eq!(operation_name(&document), Some("FeedQuery"));
    }

    #[test]
    fn test_named_mutation() {
        let document =
            parse_executable_document("mutation PostLink($url: String!) { post(url: $url) { id } }")
                .unwrap();
        assert_eq!(operation_name(&document), Some("PostLink"));
    }

    #[test]
    fn test_unnamed_shorthand_query() {
        let document = parse_executable_document("{ feed { id } }").unwrap();
        assert_eq!(operation_name(&document), None);
    }

    #[test]
    fn test_fragment_only_document() {
        let document =
            parse_executable_document("fragment LinkFields on Link { id url }").unwrap();
        assert_eq!(operation_name(&document), None);
    }

    #[test]
    fn test_fragment_before_operation_is_skipped() {
        let document = parse_executable_document(
            "fragment LinkFields on Link { id url } query FeedQuery { feed { ...LinkFields } }",
        )
        .unwrap();
        assert_eq!(operation_name(&document), Some("FeedQuery"));
    }

    #[test]
    fn test_multiple_operations_uses_first() {
        let document = parse_executable_document(
            "query FeedQuery { feed { id } } query ProfileQuery { profile { id } }",
        )
        .unwrap();
        assert_eq!(operation_name(&document), Some("FeedQuery"));
    }
}
