//! Free-form procedures for steps that depend on project files the generator
//! never sees: locating the checkout flow and routing it through Razorpay.

use super::catalog::{render, FrontendArtifact};
use super::request::ExistingHints;
use std::fmt::Write;

/// Which discovery procedure a plan carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// Plain HTML pages loading the helper through a `<script>` tag
    BrowserScript,
    /// Any component-based or template-based frontend
    Generic,
}

const BROWSER_SCRIPT_DISCOVERY: &str = r#"STEP-BY-STEP DISCOVERY PROCESS:

1. FIND THE CHECKOUT HTML PAGE:
   - Look for checkout.html, cart.html, payment.html, or a checkout section in index.html
   - Check which HTML file actually contains the checkout form or button
   - It may NOT be index.html

2. FIND WHICH JS FILE THAT PAGE LOADS:
   - Read the <script> tags of the checkout page
   - Common names: checkout.js, cart.js, payment.js, app.js, main.js, bundle.js
   - Do NOT assume app.js; use whatever the checkout page really loads

3. ADD THE RAZORPAY HELPER TO THAT PAGE:
   - Add <script src="/js/razorpay.js"></script> (adjust the path if needed)
   - Place it BEFORE the checkout script so the helper is defined first
"#;

const GENERIC_DISCOVERY: &str = r#"STEP-BY-STEP DISCOVERY PROCESS:

1. FIND THE CHECKOUT/PAYMENT PAGE:
   - Look for checkout.html, cart.html, payment.html, or a checkout route/component
   - For SPAs: find the checkout component or page
   - For server templates: find the template rendering the checkout form

2. FIND WHICH SCRIPT OR COMPONENT HANDLES CHECKOUT:
   - Follow the <script> tags or the imports of that page
   - Common names: checkout.js, cart.js, payment.js, Checkout.jsx/vue/svelte
   - Do NOT assume app.js or main.js

3. ADD THE RAZORPAY SCRIPT OR IMPORT:
   - Vanilla JS: add <script src="/js/razorpay.js"></script> to the checkout HTML
   - React/Vue/Angular/Svelte: import the Razorpay component in the checkout file
"#;

const BROWSER_SCRIPT_PAY_WITH: &str =
    "Call initiateRazorpayPayment(amount, onSuccess, onFailure) from /js/razorpay.js.";

const GENERIC_PAY_WITH: &str = "Call the payment function or component exported by the created \
     frontend file (named in the frontend wiring instructions). payWithRazorpay below stands in for it.";

const PAYMENT_FLOW: &str = r#"
4. FIND THE PAYMENT/CHECKOUT FUNCTION:
   - Search for initiatePayment, handleCheckout, checkout, placeOrder,
     processPayment, submitOrder, handlePayment
   - Look for paymentMethod: 'cod', payment placeholders or TODO comments

5. MODIFY THAT FUNCTION TO PAY THROUGH RAZORPAY:

   __PAY_WITH__

   Before starting the payment you MUST:
   a) Collect all order data (cart items, customer info, shipping address)
   b) Save it to localStorage (or component state) so the success callback can read it

   Example pattern:
   async function existingCheckoutFunction() {
     // 1. Amount to charge
     const total = calculateTotal();

     // 2. Save the order BEFORE paying
     const pendingOrder = {
       items: getCartItems(),
       customerInfo: {
         name: document.getElementById('name-field').value,
         email: document.getElementById('email-field').value,
       },
       shippingAddress: { /* ... */ },
     };
     localStorage.setItem('pendingOrder', JSON.stringify(pendingOrder));

     // 3. Pay
     __PAY_CALL__(
       total,
       async (paymentResponse) => {
         // 4. Paid: create the order from the saved data
         const orderData = JSON.parse(localStorage.getItem('pendingOrder'));
         orderData.paymentMethod = 'razorpay';
         orderData.paymentId = paymentResponse.paymentId;
         // call the existing order creation API with orderData
         localStorage.removeItem('pendingOrder');
       },
       (error) => {
         alert('Payment failed: ' + error.message);
         localStorage.removeItem('pendingOrder');
       }
     );
   }

COMMON MISTAKES TO AVOID:
- Editing a script the checkout page does not load (app.js when checkout.html uses checkout.js)
- Adding the script to index.html when the checkout lives in checkout.html
- Writing new functions instead of changing the existing checkout flow
- Leaving COD or placeholder payment code active
- NOT saving order data before payment ("order data not found" errors)
- Reading form fields inside the success callback (the form may be gone or reset)"#;

/// Renders the discovery procedure of the `wire_payment` action
pub fn wire_payment_procedure(kind: ProcedureKind, hints: &ExistingHints) -> String {
    let (discovery, pay_with, pay_call) = match kind {
        ProcedureKind::BrowserScript => (
            BROWSER_SCRIPT_DISCOVERY,
            BROWSER_SCRIPT_PAY_WITH,
            "initiateRazorpayPayment",
        ),
        ProcedureKind::Generic => (GENERIC_DISCOVERY, GENERIC_PAY_WITH, "payWithRazorpay"),
    };

    let flow = render(PAYMENT_FLOW, &[("PAY_WITH", pay_with), ("PAY_CALL", pay_call)]);
    let mut procedure = format!("{}{}", discovery, flow);
    procedure.push_str(&project_hints(hints));
    procedure
}

/// `PROJECT HINTS` section for the given hints; empty when there are none
pub fn project_hints(hints: &ExistingHints) -> String {
    if hints.order_endpoint.is_none() && hints.payment_function.is_none() {
        return String::new();
    }

    let mut section = String::from("\n\nPROJECT HINTS:");
    if let Some(endpoint) = &hints.order_endpoint {
        let _ = write!(
            section,
            "\n- Existing order endpoint: {}. Call it from the success callback with the paid order data instead of creating a new endpoint",
            endpoint
        );
    }
    if let Some(function) = &hints.payment_function {
        let _ = write!(
            section,
            "\n- Existing payment function: {}. Modify this function; do not create a parallel one",
            function
        );
    }
    section
}

/// Frontend part of the AI instructions for one rendered artifact
pub fn frontend_wiring_instructions(frontend: &FrontendArtifact) -> String {
    format!(
        r#"**CRITICAL - FRONTEND WIRING (DO NOT SKIP):**

1. DISCOVER the project structure:
   - Find where the checkout page or component is
   - Find which file handles the checkout logic
   - DO NOT assume file names like app.js or index.html

2. ADD the Razorpay frontend code ({framework}, {file}):
   - {usage}
   - Make sure it is loaded BEFORE the checkout code

3. WIRE UP the payment:
   - Find the existing checkout/payment function
   - Change it to call the Razorpay payment function
   - Create the order ONLY after the payment succeeds
   - On failure show the error and do not create the order

THE INTEGRATION IS **NOT COMPLETE** IF:
- You modified a file the checkout page does not use
- The checkout still bypasses payment (COD, direct order creation)
- You tell the user to "wire up payment" as a next step

DO NOT give "Next Steps" - complete EVERYTHING including frontend wiring."#,
        framework = frontend.display_name(),
        file = frontend.file_name,
        usage = frontend.usage,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::catalog::frontend_template;
    use crate::integration::request::{FrontendFramework, Language};

    #[test]
    fn test_browser_script_mentions_script_tag_order() {
        let text = wire_payment_procedure(ProcedureKind::BrowserScript, &ExistingHints::default());
        assert!(text.starts_with("STEP-BY-STEP DISCOVERY PROCESS:"));
        assert!(text.contains("BEFORE the checkout script"));
        assert!(text.contains("COMMON MISTAKES TO AVOID:"));
        assert!(text.contains("initiateRazorpayPayment("));
        assert!(!text.contains("PROJECT HINTS"));
    }

    #[test]
    fn test_generic_mentions_component_imports() {
        let text = wire_payment_procedure(ProcedureKind::Generic, &ExistingHints::default());
        assert!(text.contains("import the Razorpay component"));
        assert!(text.contains("localStorage.setItem('pendingOrder'"));
    }

    #[test]
    fn test_generic_pays_through_created_frontend_file() {
        let text = wire_payment_procedure(ProcedureKind::Generic, &ExistingHints::default());
        assert!(text.contains("exported by the created frontend file"));
        assert!(text.contains("payWithRazorpay("));
        assert!(!text.contains("initiateRazorpayPayment"));
        assert!(!text.contains("__PAY_"));
    }

    #[test]
    fn test_hints_are_appended() {
        let hints = ExistingHints::default()
            .with_order_endpoint("/api/orders/create")
            .with_payment_function("handleCheckout");
        let text = wire_payment_procedure(ProcedureKind::Generic, &hints);
        let section = text.split("PROJECT HINTS:").nth(1).unwrap();
        assert!(section.contains("/api/orders/create"));
        assert!(section.contains("handleCheckout"));
    }

    #[test]
    fn test_package_manager_alone_adds_no_hints_section() {
        let hints = ExistingHints::default().with_package_manager("yarn");
        assert_eq!(project_hints(&hints), "");
    }

    #[test]
    fn test_frontend_wiring_names_artifact() {
        let artifact = frontend_template(FrontendFramework::React).render(Language::TypeScript);
        let text = frontend_wiring_instructions(&artifact);
        assert!(text.contains("src/components/RazorpayButton.tsx"));
        assert!(text.contains(&artifact.usage));
        assert!(text.contains("NOT COMPLETE"));
    }
}
