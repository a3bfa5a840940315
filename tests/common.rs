//! Common test utilities for building converters and sample queries.
use sqldmn::prelude::*;

/// The document identifier every deterministic test converter stamps on
/// its output.
#[allow(dead_code)]
pub const FIXED_ID: &str = "decision_20240101000000";

/// The canonical happy-path query: two AND-joined conditions.
#[allow(dead_code)]
pub const ORDERS_QUERY: &str = "SELECT * FROM orders WHERE status = active AND total > 100";

/// A query without any filter; converts to an empty decision table.
#[allow(dead_code)]
pub const UNFILTERED_QUERY: &str = "SELECT * FROM products";

/// Creates a converter with a pinned document identifier so the generated
/// XML is reproducible across runs.
#[allow(dead_code)]
pub fn fixed_converter() -> Converter {
    Converter::builder()
        .with_id_source(Box::new(FixedIdSource::new(FIXED_ID)))
        .build()
}

/// Converts a query with a pinned identifier.
#[allow(dead_code)]
pub fn convert_fixed(sql: &str) -> Conversion {
    fixed_converter()
        .convert(sql)
        .expect("conversion should succeed")
}

/// Returns a scratch file path under the system temp directory, unique to
/// this test process.
#[allow(dead_code)]
pub fn test_output_path(file_name: &str) -> String {
    std::env::temp_dir()
        .join(format!("sqldmn_{}_{}", std::process::id(), file_name))
        .to_string_lossy()
        .into_owned()
}
