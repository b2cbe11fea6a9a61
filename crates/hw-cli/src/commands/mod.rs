pub mod encounter;
pub mod hex_tables;
pub mod roll;
pub mod tables;
pub mod travel;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use hw_tables::TableRegistry;

/// The built-in tables, plus a pack from disk when one is given.
fn load_registry(pack: Option<&Path>) -> Result<Arc<TableRegistry>, String> {
    let registry = TableRegistry::with_builtin_tables();
    if let Some(path) = pack {
        registry
            .load_pack_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?;
    }
    Ok(Arc::new(registry))
}

/// Parse an optional named value, naming the kind of thing on failure.
fn parse_opt<T>(
    value: Option<&str>,
    what: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, String> {
    value
        .map(|v| parse(v).ok_or_else(|| format!("unknown {what} '{v}'")))
        .transpose()
}

/// Parse a required named value.
fn parse_named<T>(value: &str, what: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, String> {
    parse(value).ok_or_else(|| format!("unknown {what} '{value}'"))
}

/// Shorten long text for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}
