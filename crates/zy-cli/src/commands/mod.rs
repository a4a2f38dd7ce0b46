pub mod cast;
pub mod list;
pub mod session;
pub mod show;

use zy_divination::Method;

/// Parse a method string at the CLI boundary.
pub fn parse_method(s: &str) -> Result<Method, String> {
    s.parse::<Method>().map_err(|e| e.to_string())
}
