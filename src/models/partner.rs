use serde::Serialize;

/// A commission partner. `commission_rate` is a free-text field coming
/// from the CRM UI: it may carry a trailing '%' or be plain garbage, so it
/// is kept as entered and parsed on use (garbage parses to 0).
#[derive(Debug, Clone, Serialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub commission_rate: String,
    pub created_at: String,
}
