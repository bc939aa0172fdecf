use crate::integration::catalog::{render, FrontendArtifact, Package};
use crate::integration::plan::{EditItem, FileAction};

pub(super) const HANDLERS_FILE: &str = "handlers/razorpay.go";
pub(super) const HANDLERS_IMPORT: &str = "\"YOUR_MODULE/handlers\"";

const SHARED: &str = r#"var client = razorpay.NewClient(os.Getenv("RAZORPAY_KEY_ID"), os.Getenv("RAZORPAY_KEY_SECRET"))

type OrderRequest struct {
	Amount   float64 `json:"amount"`
	Currency string  `json:"currency"`
	Receipt  string  `json:"receipt"`
}

type VerifyRequest struct {
	OrderID   string `json:"razorpay_order_id"`
	PaymentID string `json:"razorpay_payment_id"`
	Signature string `json:"razorpay_signature"`
}

func (r *OrderRequest) applyDefaults() {
	if r.Currency == "" {
		r.Currency = "INR"
	}
	if r.Receipt == "" {
		r.Receipt = fmt.Sprintf("receipt_%d", time.Now().Unix())
	}
}

func (r *OrderRequest) payload() map[string]interface{} {
	return map[string]interface{}{
		"amount":   int(r.Amount * 100),
		"currency": r.Currency,
		"receipt":  r.Receipt,
	}
}

func validSignature(req VerifyRequest) bool {
	mac := hmac.New(sha256.New, []byte(os.Getenv("RAZORPAY_KEY_SECRET")))
	mac.Write([]byte(req.OrderID + "|" + req.PaymentID))
	expected := hex.EncodeToString(mac.Sum(nil))
	return hmac.Equal([]byte(expected), []byte(req.Signature))
}
"#;

/// Renders a handlers file: shared declarations followed by the
/// framework-specific handlers
pub(super) fn handlers_source(extra_imports: &str, handlers: &str) -> String {
    render(
        r#"package handlers

import (
	"crypto/hmac"
	"crypto/sha256"
	"encoding/hex"
	"fmt"
	"net/http"
	"os"
	"time"

__EXTRA__
	razorpay "github.com/razorpay/razorpay-go"
)

__SHARED__
__HANDLERS__"#,
        &[
            ("EXTRA", extra_imports),
            ("SHARED", SHARED),
            ("HANDLERS", handlers),
        ],
    )
}

pub(super) fn packages() -> Vec<Package> {
    vec![Package::with_source(
        "razorpay-go",
        "github.com/razorpay/razorpay-go",
    )]
}

/// Handler import, then the order route, then the verify route
pub(super) fn main_wiring(framework: &str, register: &str) -> FileAction {
    FileAction::manual_edit(
        "main.go",
        format!("Register the Razorpay handlers on the {} router", framework),
        vec![
            EditItem::new(
                "In the import block of main.go",
                HANDLERS_IMPORT,
                "Replace YOUR_MODULE with the module path from go.mod; the package must be imported before its handlers are used",
            ),
            EditItem::new(
                "In the router setup",
                render(register, &[("PATH", "/api/razorpay/order"), ("HANDLER", "handlers.CreateOrder")]),
                "Order endpoint - needs the handlers import above",
            ),
            EditItem::new(
                "After the order route",
                render(register, &[("PATH", "/api/razorpay/verify"), ("HANDLER", "handlers.VerifyPayment")]),
                "Verify endpoint",
            ),
        ],
    )
}

pub(super) fn setup_steps(_frontend: &FrontendArtifact) -> Vec<String> {
    vec![
        format!("Create {} with the Razorpay handlers", HANDLERS_FILE),
        "Import the handlers package in main.go (use the module path from go.mod) and register the order and verify routes".to_string(),
        "Set RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET in the server environment".to_string(),
    ]
}
