use super::go_common::{handlers_source, main_wiring, packages, setup_steps, HANDLERS_FILE};
use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::FileAction;
use crate::integration::request::{BackendFramework, Language};

const HANDLERS: &str = r#"func CreateOrder(c echo.Context) error {
	var req OrderRequest
	if err := c.Bind(&req); err != nil {
		return c.JSON(http.StatusBadRequest, map[string]interface{}{"success": false, "error": err.Error()})
	}
	if req.Amount <= 0 {
		return c.JSON(http.StatusBadRequest, map[string]interface{}{"success": false, "error": "Invalid amount"})
	}
	req.applyDefaults()

	order, err := client.Order.Create(req.payload(), nil)
	if err != nil {
		return c.JSON(http.StatusInternalServerError, map[string]interface{}{"success": false, "error": err.Error()})
	}

	return c.JSON(http.StatusOK, map[string]interface{}{
		"success":  true,
		"orderId":  order["id"],
		"amount":   order["amount"],
		"currency": order["currency"],
		"keyId":    os.Getenv("RAZORPAY_KEY_ID"),
	})
}

func VerifyPayment(c echo.Context) error {
	var req VerifyRequest
	if err := c.Bind(&req); err != nil {
		return c.JSON(http.StatusBadRequest, map[string]interface{}{"success": false, "error": err.Error()})
	}

	if !validSignature(req) {
		return c.JSON(http.StatusBadRequest, map[string]interface{}{"success": false, "error": "Invalid signature"})
	}
	return c.JSON(http.StatusOK, map[string]interface{}{"success": true, "paymentId": req.PaymentID, "orderId": req.OrderID})
}
"#;

pub struct EchoTemplate;

impl BackendTemplate for EchoTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Echo
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn packages(&self) -> Vec<Package> {
        packages()
    }

    fn files(&self, _language: Language) -> Vec<FileAction> {
        vec![FileAction::create(
            HANDLERS_FILE,
            handlers_source("\t\"github.com/labstack/echo/v4\"", HANDLERS),
            "Echo handlers for Razorpay",
        )]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![main_wiring("Echo", "e.POST(\"__PATH__\", __HANDLER__)")]
    }

    fn setup_steps(&self, _language: Language, frontend: &FrontendArtifact) -> Vec<String> {
        setup_steps(frontend)
    }

    fn env_file(&self) -> Option<&'static str> {
        None
    }
}
