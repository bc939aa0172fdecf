use crate::integration::catalog::{FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

const COMPONENT: &str = r#"<script>
  import { onMount, createEventDispatcher } from 'svelte';

  export let amount = 0;

  const dispatch = createEventDispatcher();
  let loading = false;
  let ready = false;

  onMount(() => {
    const script = document.createElement('script');
    script.src = 'https://checkout.razorpay.com/v1/checkout.js';
    script.onload = () => (ready = true);
    document.head.appendChild(script);
  });

  async function pay() {
    if (!ready || loading) return;
    loading = true;
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
        handler: async (response) => {
          const verify = await fetch('/api/razorpay/verify', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(response),
          });
          const result = await verify.json();
          if (result.success) {
            dispatch('success', result);
          } else {
            dispatch('error', new Error(result.error));
          }
          loading = false;
        },
        modal: { ondismiss: () => (loading = false) },
      };
      new window.Razorpay(options).open();
    } catch (e) {
      dispatch('error', e);
      loading = false;
    }
  }
</script>

<button on:click={pay} disabled={!ready || loading}>
  {loading ? 'Processing...' : 'Pay Now'}
</button>
"#;

pub struct SvelteTemplate;

impl FrontendTemplate for SvelteTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::Svelte
    }

    fn render(&self, _language: Language) -> FrontendArtifact {
        FrontendArtifact {
            framework: self.id(),
            file_name: "src/components/RazorpayButton.svelte".to_string(),
            code: COMPONENT.to_string(),
            usage: "Import RazorpayButton in the checkout component and use <RazorpayButton amount={total} on:success={...} on:error={...} />".to_string(),
            description: "Svelte component for Razorpay payments".to_string(),
        }
    }
}
