//! Query-string construction.
//!
//! # Design
//! Every optional API parameter flows through `Query`. Empty values (absent,
//! `""`, `"0"`, `false`, `0`) are dropped before encoding, so callers can
//! pass their optional arguments straight through without filtering.
//! A `Query` with nothing left builds to `None`, never to a bare `?`.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Absent,
    Str(String),
    Int(i64),
    Bool(bool),
}

impl QueryValue {
    /// Whether the value counts as empty and must be omitted.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryValue::Absent => true,
            QueryValue::Str(s) => s.is_empty() || s == "0",
            QueryValue::Int(n) => *n == 0,
            QueryValue::Bool(b) => !*b,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Absent => Ok(()),
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Bool(true) => f.write_str("1"),
            QueryValue::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

macro_rules! int_query_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_query_value!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

/// Ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Empty values are kept here and dropped at build time.
    pub fn param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Encode the non-empty parameters as `?k=v&...`, or `None` if there are none.
    pub fn build(&self) -> Option<String> {
        build_query_string(self.params.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// Encode `params` in order, skipping empty values.
pub fn build_query_string<'a, I>(params: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, &'a QueryValue)>,
{
    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    let mut kept = 0usize;
    for (key, value) in params {
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, &value.to_string());
        kept += 1;
    }
    (kept > 0).then(|| serializer.finish())
}

/// Join list values with commas; the builder never flattens lists itself.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(","),
    )
}
