use super::component_extension;
use crate::integration::catalog::{render, FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

const COMPONENT: &str = r#"'use client';

import { useState } from 'react';
import Script from 'next/script';
__TYPES__
export function RazorpayCheckout({
  amount,
  onSuccess,
  onError,
  buttonText = 'Pay Now',
  className = '',
}__PROPS_TYPE__) {
  const [loading, setLoading] = useState(false);
  const [scriptLoaded, setScriptLoaded] = useState(false);

  const handlePayment = async () => {
    if (!scriptLoaded || loading) return;
    setLoading(true);

    try {
      const orderRes = await fetch('/api/razorpay/order', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ amount }),
      });
      const orderData = await orderRes.json();
      if (!orderData.success) throw new Error(orderData.error);

      const options = {
        key: orderData.keyId,
        amount: orderData.amount,
        currency: orderData.currency,
        name: 'Payment',
        order_id: orderData.orderId,
        handler: async (response__ANY__) => {
          const verifyRes = await fetch('/api/razorpay/verify', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(response),
          });
          const verifyData = await verifyRes.json();

          if (verifyData.success) {
            onSuccess?.({ paymentId: verifyData.paymentId, orderId: verifyData.orderId });
          } else {
            onError?.(new Error(verifyData.error));
          }
          setLoading(false);
        },
        modal: { ondismiss: () => setLoading(false) },
        theme: { color: '#528FF0' },
      };

      const razorpay = new __WINDOW__.Razorpay(options);
      razorpay.on('payment.failed', (res__ANY__) => {
        onError?.(new Error(res.error.description));
        setLoading(false);
      });
      razorpay.open();
    } catch (error) {
      onError?.(error__AS_ERROR__);
      setLoading(false);
    }
  };

  return (
    <>
      <Script
        src="https://checkout.razorpay.com/v1/checkout.js"
        onLoad={() => setScriptLoaded(true)}
      />
      <button
        onClick={handlePayment}
        disabled={loading || !scriptLoaded}
        className={className || 'bg-blue-600 text-white px-6 py-2 rounded disabled:opacity-50'}
      >
        {loading ? 'Processing...' : buttonText}
      </button>
    </>
  );
}
"#;

const TS_TYPES: &str = r#"
interface RazorpayCheckoutProps {
  amount: number;
  onSuccess?: (data: { paymentId: string; orderId: string }) => void;
  onError?: (error: Error) => void;
  buttonText?: string;
  className?: string;
}
"#;

/// Client component used by every Next.js backend plan
pub struct NextJsClientTemplate;

impl FrontendTemplate for NextJsClientTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::NextJs
    }

    fn render(&self, language: Language) -> FrontendArtifact {
        let typed = language.is_typed();
        let vars: [(&str, &str); 5] = if typed {
            [
                ("TYPES", TS_TYPES),
                ("PROPS_TYPE", ": RazorpayCheckoutProps"),
                ("ANY", ": any"),
                ("WINDOW", "(window as any)"),
                ("AS_ERROR", " as Error"),
            ]
        } else {
            [
                ("TYPES", ""),
                ("PROPS_TYPE", ""),
                ("ANY", ""),
                ("WINDOW", "window"),
                ("AS_ERROR", ""),
            ]
        };

        FrontendArtifact {
            framework: self.id(),
            file_name: format!("components/RazorpayCheckout.{}", component_extension(typed)),
            code: render(COMPONENT, &vars),
            usage: "Import { RazorpayCheckout } from '@/components/RazorpayCheckout' in the checkout page and render <RazorpayCheckout amount={total} onSuccess={...} />".to_string(),
            description: "Next.js client component for the Razorpay checkout button".to_string(),
        }
    }
}
