//! Backend families: order creation and signature verification endpoints
//! for each supported server framework, plus the edits that mount them

pub mod django;
pub mod echo;
pub mod express;
pub mod fastapi;
pub mod fiber;
pub mod flask;
pub mod gin;
pub mod nextjs;

mod go_common;

/// Source extension for Node server files
pub(crate) fn script_extension(typed: bool) -> &'static str {
    if typed {
        "ts"
    } else {
        "js"
    }
}
