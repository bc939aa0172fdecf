use super::go_common::{handlers_source, main_wiring, packages, setup_steps, HANDLERS_FILE};
use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::FileAction;
use crate::integration::request::{BackendFramework, Language};

const HANDLERS: &str = r#"func CreateOrder(c *fiber.Ctx) error {
	var req OrderRequest
	if err := c.BodyParser(&req); err != nil {
		return c.Status(http.StatusBadRequest).JSON(fiber.Map{"success": false, "error": err.Error()})
	}
	if req.Amount <= 0 {
		return c.Status(http.StatusBadRequest).JSON(fiber.Map{"success": false, "error": "Invalid amount"})
	}
	req.applyDefaults()

	order, err := client.Order.Create(req.payload(), nil)
	if err != nil {
		return c.Status(http.StatusInternalServerError).JSON(fiber.Map{"success": false, "error": err.Error()})
	}

	return c.JSON(fiber.Map{
		"success":  true,
		"orderId":  order["id"],
		"amount":   order["amount"],
		"currency": order["currency"],
		"keyId":    os.Getenv("RAZORPAY_KEY_ID"),
	})
}

func VerifyPayment(c *fiber.Ctx) error {
	var req VerifyRequest
	if err := c.BodyParser(&req); err != nil {
		return c.Status(http.StatusBadRequest).JSON(fiber.Map{"success": false, "error": err.Error()})
	}

	if !validSignature(req) {
		return c.Status(http.StatusBadRequest).JSON(fiber.Map{"success": false, "error": "Invalid signature"})
	}
	return c.JSON(fiber.Map{"success": true, "paymentId": req.PaymentID, "orderId": req.OrderID})
}
"#;

pub struct FiberTemplate;

impl BackendTemplate for FiberTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Fiber
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
            handlers_source("\t\"github.com/gofiber/fiber/v2\"", HANDLERS),
            "Fiber handlers for Razorpay",
        )]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![main_wiring("Fiber", "app.Post(\"__PATH__\", __HANDLER__)")]
    }

    fn setup_steps(&self, _language: Language, frontend: &FrontendArtifact) -> Vec<String> {
        setup_steps(frontend)
    }

    fn env_file(&self) -> Option<&'static str> {
        None
    }
}
