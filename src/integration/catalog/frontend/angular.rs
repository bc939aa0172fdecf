use crate::integration::catalog::{FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

const COMPONENT: &str = r#"import { Component, EventEmitter, Input, OnInit, Output } from '@angular/core';

declare var Razorpay: any;

@Component({
  selector: 'app-razorpay-button',
  standalone: true,
  template: `
    <button (click)="pay()" [disabled]="!ready || loading">
      {{ loading ? 'Processing...' : 'Pay Now' }}
    </button>
  `,
})
export class RazorpayButtonComponent implements OnInit {
  @Input() amount = 0;
  @Output() success = new EventEmitter<any>();
  @Output() error = new EventEmitter<Error>();

  loading = false;
  ready = false;

  ngOnInit() {
    const script = document.createElement('script');
    script.src = 'https://checkout.razorpay.com/v1/checkout.js';
    script.onload = () => (this.ready = true);
    document.head.appendChild(script);
  }

  async pay() {
    if (!this.ready || this.loading) return;
    this.loading = true;
    try {
      const res = await fetch('/api/razorpay/order', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ amount: this.amount }),
      });
      const data = await res.json();
      if (!data.success) throw new Error(data.error);

      const options = {
        key: data.keyId,
        amount: data.amount,
        currency: data.currency,
        order_id: data.orderId,
        handler: async (response: any) => {
          const verify = await fetch('/api/razorpay/verify', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(response),
          });
          const result = await verify.json();
          if (result.success) {
            this.success.emit(result);
          } else {
            this.error.emit(new Error(result.error));
          }
          this.loading = false;
        },
        modal: { ondismiss: () => (this.loading = false) },
      };
      new Razorpay(options).open();
    } catch (e) {
      this.error.emit(e as Error);
      this.loading = false;
    }
  }
}
"#;

/// Angular sources are always TypeScript
pub struct AngularTemplate;

impl FrontendTemplate for AngularTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::Angular
    }

    fn render(&self, _language: Language) -> FrontendArtifact {
        FrontendArtifact {
            framework: self.id(),
            file_name: "src/app/components/razorpay-button.component.ts".to_string(),
            code: COMPONENT.to_string(),
            usage: "Add RazorpayButtonComponent to the checkout component's imports and use <app-razorpay-button [amount]=\"total\" (success)=\"...\" (error)=\"...\">".to_string(),
            description: "Angular standalone component for Razorpay payments".to_string(),
        }
    }
}
