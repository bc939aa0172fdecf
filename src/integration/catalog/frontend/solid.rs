use super::component_extension;
use crate::integration::catalog::{render, FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

const COMPONENT: &str = r#"import { createSignal, onMount } from 'solid-js';
__TYPES__
export function RazorpayButton(props__PROPS_TYPE__) {
  const [loading, setLoading] = createSignal(false);
  const [ready, setReady] = createSignal(false);

  onMount(() => {
    const script = document.createElement('script');
    script.src = 'https://checkout.razorpay.com/v1/checkout.js';
    script.onload = () => setReady(true);
    document.head.appendChild(script);
  });

  const pay = async () => {
    if (!ready() || loading()) return;
    setLoading(true);
    try {
      const res = await fetch('/api/razorpay/order', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ amount: props.amount }),
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
            props.onSuccess?.(result);
          } else {
            props.onError?.(new Error(result.error));
          }
          setLoading(false);
        },
        modal: { ondismiss: () => setLoading(false) },
      };
      new __WINDOW__.Razorpay(options).open();
    } catch (e) {
      props.onError?.(e__AS_ERROR__);
      setLoading(false);
    }
  };

  return (
    <button onClick={pay} disabled={!ready() || loading()}>
      {loading() ? 'Processing...' : props.label ?? 'Pay Now'}
    </button>
  );
}
"#;

const TS_TYPES: &str = r#"
export interface RazorpayButtonProps {
  amount: number;
  label?: string;
  onSuccess?: (result: { paymentId: string; orderId: string }) => void;
  onError?: (error: Error) => void;
}
"#;

pub struct SolidTemplate;

impl FrontendTemplate for SolidTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::Solid
    }

    fn render(&self, language: Language) -> FrontendArtifact {
        let typed = language.is_typed();
        let vars: [(&str, &str); 5] = if typed {
            [
                ("TYPES", TS_TYPES),
                ("PROPS_TYPE", ": RazorpayButtonProps"),
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
            file_name: format!(
                "src/components/RazorpayButton.{}",
                component_extension(typed)
            ),
            code: render(COMPONENT, &vars),
            usage: "Import RazorpayButton in the checkout component and render <RazorpayButton amount={total()} onSuccess={...} />".to_string(),
            description: "SolidJS component for Razorpay payments".to_string(),
        }
    }
}
