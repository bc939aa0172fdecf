use super::component_extension;
use crate::integration::catalog::{render, FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

const COMPONENT: &str = r#"import { useState, useEffect } from 'react';
__TYPES__
export function useRazorpay() {
  const [loading, setLoading] = useState(false);
  const [scriptLoaded, setScriptLoaded] = useState(false);

  useEffect(() => {
    const script = document.createElement('script');
    script.src = 'https://checkout.razorpay.com/v1/checkout.js';
    script.onload = () => setScriptLoaded(true);
    document.body.appendChild(script);
    return () => {
      document.body.removeChild(script);
    };
  }, []);

  const pay = async (__PAY_PARAMS__) => {
    if (!scriptLoaded || loading) return;
    setLoading(true);
    try {
      const res = await fetch('/api/razorpay/order', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ amount }),
      });
      const data = await res.json();
      if (!data.success) throw new Error(data.error);

      const options = {
        key: data.keyId,
        amount: data.amount,
        currency: data.currency,
        order_id: data.orderId,
        handler: async (response__ANY__) => {
          const verify = await fetch('/api/razorpay/verify', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(response),
          });
          const result = await verify.json();
          if (result.success) {
            onSuccess?.(result);
          } else {
            onError?.(new Error(result.error));
          }
          setLoading(false);
        },
        modal: { ondismiss: () => setLoading(false) },
      };
      new __WINDOW__.Razorpay(options).open();
    } catch (e) {
      onError?.(e__AS_ERROR__);
      setLoading(false);
    }
  };

  return { pay, loading, ready: scriptLoaded };
}

export function RazorpayButton({ amount, onSuccess, onError, children }__PROPS_TYPE__) {
  const { pay, loading, ready } = useRazorpay();
  return (
    <button onClick={() => pay(amount, onSuccess, onError)} disabled={!ready || loading}>
      {loading ? 'Processing...' : children || 'Pay Now'}
    </button>
  );
}
"#;

const TS_TYPES: &str = r#"import type { ReactNode } from 'react';

export interface PaymentResult {
  success: boolean;
  paymentId: string;
  orderId: string;
}

export interface RazorpayButtonProps {
  amount: number;
  onSuccess?: (result: PaymentResult) => void;
  onError?: (error: Error) => void;
  children?: ReactNode;
}
"#;

pub struct ReactTemplate;

impl FrontendTemplate for ReactTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::React
    }

    fn render(&self, language: Language) -> FrontendArtifact {
        let typed = language.is_typed();
        let vars: [(&str, &str); 6] = if typed {
            [
                ("TYPES", TS_TYPES),
                (
                    "PAY_PARAMS",
                    "amount: number, onSuccess?: (result: PaymentResult) => void, onError?: (error: Error) => void",
                ),
                ("ANY", ": any"),
                ("WINDOW", "(window as any)"),
                ("AS_ERROR", " as Error"),
                ("PROPS_TYPE", ": RazorpayButtonProps"),
            ]
        } else {
            [
                ("TYPES", ""),
                ("PAY_PARAMS", "amount, onSuccess, onError"),
                ("ANY", ""),
                ("WINDOW", "window"),
                ("AS_ERROR", ""),
                ("PROPS_TYPE", ""),
            ]
        };

        FrontendArtifact {
            framework: self.id(),
            file_name: format!(
                "src/components/RazorpayButton.{}",
                component_extension(typed)
            ),
            code: render(COMPONENT, &vars),
            usage: "Import RazorpayButton in the checkout component and render <RazorpayButton amount={total} onSuccess={...} onError={...} />".to_string(),
            description: "React hook and button component for Razorpay payments".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_variant() {
        let artifact = ReactTemplate.render(Language::TypeScript);
        assert_eq!(artifact.file_name, "src/components/RazorpayButton.tsx");
        assert!(artifact.code.contains("interface RazorpayButtonProps"));
        assert!(artifact.code.contains("(window as any).Razorpay"));
    }

    #[test]
    fn test_untyped_variant() {
        let artifact = ReactTemplate.render(Language::JavaScript);
        assert_eq!(artifact.file_name, "src/components/RazorpayButton.jsx");
        assert!(!artifact.code.contains("interface"));
        assert!(artifact.code.contains("new window.Razorpay(options)"));
    }
}
