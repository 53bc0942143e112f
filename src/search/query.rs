//! Request and response types for the RCSB Search API.
//!
//! The request body is a grouped boolean query over text-service
//! attributes plus pagination and sort directives; the response carries
//! the server-reported total and one identifier per hit.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Release-date cutoff, matching the AlphaFold2 training-data split.
pub const RELEASE_DATE_CUTOFF: &str = "2021-09-30T23:59:59Z";

/// Maximum accepted resolution, in angstroms.
pub const MAX_RESOLUTION: f64 = 9.0;

/// Page size for search pagination (the server maximum).
pub const PAGE_ROWS: usize = 10_000;

const RELEASE_DATE_ATTRIBUTE: &str = "rcsb_accession_info.initial_release_date";
const RESOLUTION_ATTRIBUTE: &str = "rcsb_entry_info.resolution_combined";

/// A full search request body.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: QueryNode,
    pub return_type: String,
    pub request_options: RequestOptions,
}

/// One node of the boolean query tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryNode {
    /// Boolean combination of child nodes.
    Group {
        logical_operator: String,
        nodes: Vec<QueryNode>,
    },
    /// Leaf comparison against one attribute.
    Terminal {
        service: String,
        parameters: TerminalParameters,
    },
}

impl QueryNode {
    fn text_filter(attribute: &str, operator: &str, value: Value) -> Self {
        Self::Terminal {
            service: "text".to_string(),
            parameters: TerminalParameters {
                attribute: attribute.to_string(),
                operator: operator.to_string(),
                value,
            },
        }
    }
}

/// Attribute comparison carried by a terminal node.
#[derive(Debug, Clone, Serialize)]
pub struct TerminalParameters {
    pub attribute: String,
    pub operator: String,
    pub value: Value,
}

/// Pagination and sort directives.
#[derive(Debug, Clone, Serialize)]
pub struct RequestOptions {
    pub paginate: Paginate,
    pub sort: Vec<SortDirective>,
}

/// Page window within the full result set.
#[derive(Debug, Clone, Serialize)]
pub struct Paginate {
    pub start: usize,
    pub rows: usize,
}

/// One sort directive.
#[derive(Debug, Clone, Serialize)]
pub struct SortDirective {
    pub sort_by: String,
    pub direction: String,
}

impl SearchRequest {
    /// The fixed entry query: release date and resolution filters ANDed,
    /// sorted ascending by initial release date.
    #[must_use]
    pub fn entry_query(start: usize) -> Self {
        Self {
            query: QueryNode::Group {
                logical_operator: "and".to_string(),
                nodes: vec![
                    QueryNode::text_filter(
                        RELEASE_DATE_ATTRIBUTE,
                        "less_or_equal",
                        json!(RELEASE_DATE_CUTOFF),
                    ),
                    QueryNode::text_filter(
                        RESOLUTION_ATTRIBUTE,
                        "less_or_equal",
                        json!(MAX_RESOLUTION),
                    ),
                ],
            },
            return_type: "entry".to_string(),
            request_options: RequestOptions {
                paginate: Paginate {
                    start,
                    rows: PAGE_ROWS,
                },
                sort: vec![SortDirective {
                    sort_by: RELEASE_DATE_ATTRIBUTE.to_string(),
                    direction: "asc".to_string(),
                }],
            },
        }
    }
}

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Size of the full result set, as reported by the server.
    pub total_count: usize,
    /// Hits on this page; may be empty even when `total_count` is not.
    #[serde(default)]
    pub result_set: Vec<SearchHit>,
}

/// One search hit.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub identifier: String,
}
