//! Frontend artifacts: the browser side of the checkout (script loading,
//! order request, Razorpay modal, signature verification call)

pub mod angular;
pub mod nextjs;
pub mod nuxt;
pub mod react;
pub mod solid;
pub mod svelte;
pub mod vanilla;
pub mod vue;

/// Source extension for component files that allow typed source
pub(crate) fn component_extension(typed: bool) -> &'static str {
    if typed {
        "tsx"
    } else {
        "jsx"
    }
}
