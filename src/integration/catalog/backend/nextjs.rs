use super::script_extension;
use crate::integration::catalog::{
    render, BackendTemplate, Ecosystem, FrontendArtifact, Package,
};
use crate::integration::plan::FileAction;
use crate::integration::request::{BackendFramework, Language};

const ORDER_ROUTE: &str = r#"__IMPORT_NEXT__
import Razorpay from 'razorpay';

const razorpay = new Razorpay({
  key_id: process.env.RAZORPAY_KEY_ID__BANG__,
  key_secret: process.env.RAZORPAY_KEY_SECRET__BANG__,
});

export async function POST(__REQUEST__) {
  try {
    const { amount, currency = 'INR', receipt } = await request.json();

    if (!amount || amount <= 0) {
      return NextResponse.json({ success: false, error: 'Invalid amount' }, { status: 400 });
    }

    const order = await razorpay.orders.create({
      amount: Math.round(amount * 100),
      currency,
      receipt: receipt || `receipt_${Date.now()}`,
    });

    return NextResponse.json({
      success: true,
      orderId: order.id,
      amount: order.amount,
      currency: order.currency,
      keyId: process.env.RAZORPAY_KEY_ID,
    });
  } catch (error) {
    console.error('Razorpay order creation failed:', error);
    return NextResponse.json({ success: false, error: 'Failed to create order' }, { status: 500 });
  }
}
"#;

const VERIFY_ROUTE: &str = r#"__IMPORT_NEXT__
import crypto from 'crypto';

export async function POST(__REQUEST__) {
  try {
    const { razorpay_order_id, razorpay_payment_id, razorpay_signature } = await request.json();

    if (!razorpay_order_id || !razorpay_payment_id || !razorpay_signature) {
      return NextResponse.json({ success: false, error: 'Missing payment details' }, { status: 400 });
    }

    const expectedSignature = crypto
      .createHmac('sha256', process.env.RAZORPAY_KEY_SECRET__BANG__)
      .update(razorpay_order_id + '|' + razorpay_payment_id)
      .digest('hex');

    const expected = Buffer.from(expectedSignature);
    const received = Buffer.from(razorpay_signature);
    const isValid = expected.length === received.length && crypto.timingSafeEqual(expected, received);

    if (!isValid) {
      return NextResponse.json({ success: false, error: 'Invalid signature' }, { status: 400 });
    }

    return NextResponse.json({
      success: true,
      message: 'Payment verified',
      paymentId: razorpay_payment_id,
      orderId: razorpay_order_id,
    });
  } catch (error) {
    console.error('Verification failed:', error);
    return NextResponse.json({ success: false, error: 'Verification failed' }, { status: 500 });
  }
}
"#;

/// App Router route handlers; file-system routing needs no wiring edits
pub struct NextJsTemplate;

impl NextJsTemplate {
    fn route_file(name: &str, language: Language) -> String {
        format!(
            "app/api/razorpay/{}/route.{}",
            name,
            script_extension(language.is_typed())
        )
    }
}

impl BackendTemplate for NextJsTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::NextJs
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn packages(&self) -> Vec<Package> {
        vec![Package::new("razorpay")]
    }

    fn files(&self, language: Language) -> Vec<FileAction> {
        let vars: [(&str, &str); 3] = if language.is_typed() {
            [
                (
                    "IMPORT_NEXT",
                    "import { NextRequest, NextResponse } from 'next/server';",
                ),
                ("REQUEST", "request: NextRequest"),
                ("BANG", "!"),
            ]
        } else {
            [
                ("IMPORT_NEXT", "import { NextResponse } from 'next/server';"),
                ("REQUEST", "request"),
                ("BANG", ""),
            ]
        };

        vec![
            FileAction::create(
                Self::route_file("order", language),
                render(ORDER_ROUTE, &vars),
                "API route for creating Razorpay orders",
            ),
            FileAction::create(
                Self::route_file("verify", language),
                render(VERIFY_ROUTE, &vars),
                "API route for verifying payment signatures",
            ),
        ]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        Vec::new()
    }

    fn setup_steps(&self, language: Language, frontend: &FrontendArtifact) -> Vec<String> {
        vec![
            format!(
                "Create {} and {}",
                Self::route_file("order", language),
                Self::route_file("verify", language)
            ),
            format!("Create {} (client component)", frontend.file_name),
            "Add RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET to .env.local".to_string(),
        ]
    }

    fn env_file(&self) -> Option<&'static str> {
        Some(".env.local")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_files_follow_language() {
        let ts = NextJsTemplate.files(Language::TypeScript);
        assert_eq!(ts[0].path(), "app/api/razorpay/order/route.ts");
        assert!(ts[0].code().unwrap().contains("request: NextRequest"));

        let js = NextJsTemplate.files(Language::JavaScript);
        assert_eq!(js[1].path(), "app/api/razorpay/verify/route.js");
        assert!(!js[1].code().unwrap().contains("NextRequest"));
        assert!(!js[1].code().unwrap().contains("SECRET!"));
    }

    #[test]
    fn test_no_wiring_needed() {
        assert!(NextJsTemplate.wiring(Language::TypeScript).is_empty());
    }
}
