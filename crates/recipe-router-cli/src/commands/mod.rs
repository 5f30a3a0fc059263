pub mod export;
pub mod list;
pub mod resolve;

use recipe_router::RouteParams;
use std::collections::BTreeMap;

/// `{a: 1, b: 2}` with keys sorted, `{}` when empty
pub(crate) fn format_params(params: &RouteParams) -> String {
    let sorted: BTreeMap<_, _> = params.iter().collect();
    let body = sorted
        .iter()
        .map(|(k, v)| format!("{}: {:?}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}
