//! Read and write requests accepted by the cache.

use serde_json::Value;

use crate::query::ExecutableDocument;

use super::Variables;

/// A request to store a query result.
pub struct WriteRequest {
    /// The parsed query document the result belongs to.
    pub query: ExecutableDocument,
    /// The result payload to store.
    pub result: Value,
    /// Variables the result was fetched with.
    pub variables: Variables,
}

impl WriteRequest {
    /// Creates a write request with no variables.
    pub fn new(query: ExecutableDocument, result: Value) -> Self {
        Self {
            query,
            result,
            variables: Variables::new(),
        }
    }

    /// Sets the variables for this request.
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

/// A request to read cached data for a query.
pub struct ReadRequest {
    /// The parsed query document to look up.
    pub query: ExecutableDocument,
    /// Variables the lookup is performed with.
    pub variables: Variables,
}

impl ReadRequest {
    /// Creates a read request with no variables.
    pub fn new(query: ExecutableDocument) -> Self {
        Self {
            query,
            variables: Variables::new(),
        }
    }

    /// Sets the variables for this request.
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_executable_document;
    use serde_json::json;

    #[test]
    fn test_write_request_defaults_to_empty_variables() {
        let query = parse_executable_document("query Feed { feed { id } }").unwrap();
        let request = WriteRequest::new(query, json!({"feed": []}));

        assert!(request.variables.is_empty());
        assert_eq!(request.result, json!({"feed": []}));
    }

    #[test]
    fn test_read_request_with_variables() {
        let query = parse_executable_document("query Feed($skip: Int) { feed { id } }").unwrap();
        let mut variables = Variables::new();
        variables.insert("skip".to_string(), json!(5));

        let request = ReadRequest::new(query).with_variables(variables.clone());

        assert_eq!(request.variables, variables);
    }
}
