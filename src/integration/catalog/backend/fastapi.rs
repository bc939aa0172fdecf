use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::{EditItem, FileAction};
use crate::integration::request::{BackendFramework, Language};

const ROUTER: &str = r#"import hashlib
import hmac
import os
import time
from typing import Optional

import razorpay
from dotenv import load_dotenv
from fastapi import APIRouter, HTTPException
from pydantic import BaseModel

load_dotenv()

router = APIRouter(prefix="/api/razorpay")
client = razorpay.Client(auth=(os.environ['RAZORPAY_KEY_ID'], os.environ['RAZORPAY_KEY_SECRET']))


class OrderRequest(BaseModel):
    amount: float
    currency: str = "INR"
    receipt: Optional[str] = None


class VerifyRequest(BaseModel):
    razorpay_order_id: str
    razorpay_payment_id: str
    razorpay_signature: str


@router.post("/order")
async def create_order(req: OrderRequest):
    if req.amount <= 0:
        raise HTTPException(status_code=400, detail="Invalid amount")
    try:
        order = client.order.create({
            'amount': int(req.amount * 100),
            'currency': req.currency,
            'receipt': req.receipt or f'receipt_{int(time.time())}',
        })
    except Exception as e:
        raise HTTPException(status_code=500, detail=str(e))

    return {
        'success': True,
        'orderId': order['id'],
        'amount': order['amount'],
        'currency': order['currency'],
        'keyId': os.environ['RAZORPAY_KEY_ID'],
    }


@router.post("/verify")
async def verify_payment(req: VerifyRequest):
    expected = hmac.new(
        os.environ['RAZORPAY_KEY_SECRET'].encode(),
        f'{req.razorpay_order_id}|{req.razorpay_payment_id}'.encode(),
        hashlib.sha256,
    ).hexdigest()

    if hmac.compare_digest(expected, req.razorpay_signature):
        return {'success': True, 'paymentId': req.razorpay_payment_id, 'orderId': req.razorpay_order_id}
    raise HTTPException(status_code=400, detail="Invalid signature")
"#;

pub struct FastApiTemplate;

impl BackendTemplate for FastApiTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::FastApi
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn packages(&self) -> Vec<Package> {
        vec![Package::new("razorpay"), Package::new("python-dotenv")]
    }

    fn files(&self, _language: Language) -> Vec<FileAction> {
        vec![
            FileAction::create("routers/__init__.py", "\n", "Routers package marker"),
            FileAction::create("routers/razorpay.py", ROUTER, "FastAPI router for Razorpay"),
        ]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![FileAction::manual_edit(
            "main.py",
            "Include the Razorpay router in the FastAPI app",
            vec![
                EditItem::new(
                    "After the other imports",
                    "from routers.razorpay import router as razorpay_router",
                    "The router must be imported before it is included",
                ),
                EditItem::new(
                    "After app = FastAPI()",
                    "app.include_router(razorpay_router)",
                    "Mounts /api/razorpay/order and /api/razorpay/verify - needs the import above",
                ),
            ],
        )]
    }

    fn setup_steps(&self, _language: Language, _frontend: &FrontendArtifact) -> Vec<String> {
        vec![
            "Create routers/razorpay.py with the Razorpay endpoints".to_string(),
            "Import the router and include it in main.py".to_string(),
            "Create .env with the Razorpay keys".to_string(),
        ]
    }
}
