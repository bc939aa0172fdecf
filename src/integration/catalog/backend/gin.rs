use super::go_common::{handlers_source, main_wiring, packages, setup_steps, HANDLERS_FILE};
use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::FileAction;
use crate::integration::request::{BackendFramework, Language};

const HANDLERS: &str = r#"func CreateOrder(c *gin.Context) {
	var req OrderRequest
	if err := c.ShouldBindJSON(&req); err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"success": false, "error": err.Error()})
		return
	}
	if req.Amount <= 0 {
		c.JSON(http.StatusBadRequest, gin.H{"success": false, "error": "Invalid amount"})
		return
	}
	req.applyDefaults()

	order, err := client.Order.Create(req.payload(), nil)
	if err != nil {
		c.JSON(http.StatusInternalServerError, gin.H{"success": false, "error": err.Error()})
		return
	}

	c.JSON(http.StatusOK, gin.H{
		"success":  true,
		"orderId":  order["id"],
		"amount":   order["amount"],
		"currency": order["currency"],
		"keyId":    os.Getenv("RAZORPAY_KEY_ID"),
	})
}

func VerifyPayment(c *gin.Context) {
	var req VerifyRequest
	if err := c.ShouldBindJSON(&req); err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"success": false, "error": err.Error()})
		return
	}

	if !validSignature(req) {
		c.JSON(http.StatusBadRequest, gin.H{"success": false, "error": "Invalid signature"})
		return
	}
	c.JSON(http.StatusOK, gin.H{"success": true, "paymentId": req.PaymentID, "orderId": req.OrderID})
}
"#;

pub struct GinTemplate;

impl BackendTemplate for GinTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Gin
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
            handlers_source("\t\"github.com/gin-gonic/gin\"", HANDLERS),
            "Gin handlers for Razorpay",
        )]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![main_wiring("Gin", "r.POST(\"__PATH__\", __HANDLER__)")]
    }

    fn setup_steps(&self, _language: Language, frontend: &FrontendArtifact) -> Vec<String> {
        setup_steps(frontend)
    }

    fn env_file(&self) -> Option<&'static str> {
        None
    }
}
