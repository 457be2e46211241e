mod path_headers;
pub mod support;
