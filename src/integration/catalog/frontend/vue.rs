use crate::integration::catalog::{FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

pub(crate) const SCRIPT_SETUP: &str = r#"const props = defineProps({ amount: Number });
const emit = defineEmits(['success', 'error']);

const loading = ref(false);
const ready = ref(false);

onMounted(() => {
  const script = document.createElement('script');
  script.src = 'https://checkout.razorpay.com/v1/checkout.js';
  script.onload = () => (ready.value = true);
  document.head.appendChild(script);
});

const pay = async () => {
  if (!ready.value || loading.value) return;
  loading.value = true;
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
      handler: async (response) => {
        const verify = await fetch('/api/razorpay/verify', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(response),
        });
        const result = await verify.json();
        if (result.success) {
          emit('success', result);
        } else {
          emit('error', new Error(result.error));
        }
        loading.value = false;
      },
      modal: { ondismiss: () => (loading.value = false) },
    };
    new window.Razorpay(options).open();
  } catch (e) {
    emit('error', e);
    loading.value = false;
  }
};
"#;

pub(crate) const BUTTON: &str = r#"<template>
  <button @click="pay" :disabled="!ready || loading">
    {{ loading ? 'Processing...' : 'Pay Now' }}
  </button>
</template>
"#;

pub struct VueTemplate;

impl FrontendTemplate for VueTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::Vue
    }

    fn render(&self, _language: Language) -> FrontendArtifact {
        let code = format!(
            "{}\n<script setup>\nimport {{ ref, onMounted }} from 'vue';\n\n{}</script>\n",
            BUTTON, SCRIPT_SETUP
        );

        FrontendArtifact {
            framework: self.id(),
            file_name: "src/components/RazorpayButton.vue".to_string(),
            code,
            usage: "Import RazorpayButton in the checkout component and use <RazorpayButton :amount=\"total\" @success=\"...\" @error=\"...\" />".to_string(),
            description: "Vue 3 component for Razorpay payments".to_string(),
        }
    }
}
