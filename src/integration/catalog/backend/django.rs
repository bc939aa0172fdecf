use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::{EditItem, FileAction};
use crate::integration::request::{BackendFramework, Language};

const VIEWS: &str = r#"import hashlib
import hmac
import json
import time

import razorpay
from django.conf import settings
from django.http import JsonResponse
from django.views.decorators.csrf import csrf_exempt
from django.views.decorators.http import require_POST

client = razorpay.Client(auth=(settings.RAZORPAY_KEY_ID, settings.RAZORPAY_KEY_SECRET))


@csrf_exempt
@require_POST
def create_order(request):
    try:
        data = json.loads(request.body)
        amount = data.get('amount', 0)

        if amount <= 0:
            return JsonResponse({'success': False, 'error': 'Invalid amount'}, status=400)

        order = client.order.create({
            'amount': int(amount * 100),  # paise
            'currency': data.get('currency', 'INR'),
            'receipt': data.get('receipt', f'receipt_{int(time.time())}'),
        })

        return JsonResponse({
            'success': True,
            'orderId': order['id'],
            'amount': order['amount'],
            'currency': order['currency'],
            'keyId': settings.RAZORPAY_KEY_ID,
        })
    except Exception as e:
        return JsonResponse({'success': False, 'error': str(e)}, status=500)


@csrf_exempt
@require_POST
def verify_payment(request):
    try:
        data = json.loads(request.body)
        order_id = data.get('razorpay_order_id')
        payment_id = data.get('razorpay_payment_id')
        signature = data.get('razorpay_signature')

        if not all([order_id, payment_id, signature]):
            return JsonResponse({'success': False, 'error': 'Missing payment details'}, status=400)

        expected = hmac.new(
            settings.RAZORPAY_KEY_SECRET.encode(),
            f'{order_id}|{payment_id}'.encode(),
            hashlib.sha256,
        ).hexdigest()

        if hmac.compare_digest(expected, signature):
            return JsonResponse({
                'success': True,
                'message': 'Payment verified',
                'paymentId': payment_id,
                'orderId': order_id,
            })
        return JsonResponse({'success': False, 'error': 'Invalid signature'}, status=400)
    except Exception as e:
        return JsonResponse({'success': False, 'error': str(e)}, status=500)
"#;

const URLS: &str = r#"from django.urls import path

from . import views

urlpatterns = [
    path('order', views.create_order, name='razorpay_order'),
    path('verify', views.verify_payment, name='razorpay_verify'),
]
"#;

pub struct DjangoTemplate;

impl BackendTemplate for DjangoTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Django
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn packages(&self) -> Vec<Package> {
        vec![Package::new("razorpay"), Package::new("python-dotenv")]
    }

    fn files(&self, _language: Language) -> Vec<FileAction> {
        vec![
            FileAction::create("razorpay_payments/__init__.py", "\n", "Django app package marker"),
            FileAction::create("razorpay_payments/views.py", VIEWS, "Django views for Razorpay"),
            FileAction::create("razorpay_payments/urls.py", URLS, "Django URL patterns for Razorpay"),
        ]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![
            FileAction::manual_edit(
                "settings.py",
                "Add Razorpay settings to the project settings.py",
                vec![
                    EditItem::new(
                        "At the top with the other imports (skip if already present)",
                        "import os",
                        "The settings below read from os.environ",
                    ),
                    EditItem::new(
                        "Right after import os",
                        "from dotenv import load_dotenv",
                        "Loads the Razorpay keys from .env",
                    ),
                    EditItem::new(
                        "After the dotenv import, before any os.environ lookups",
                        "load_dotenv()",
                        "Must run before the RAZORPAY_* settings are read",
                    ),
                    EditItem::new(
                        "After the other settings",
                        "RAZORPAY_KEY_ID = os.environ.get('RAZORPAY_KEY_ID')",
                        "Razorpay key id, read at runtime - needs import os above",
                    ),
                    EditItem::new(
                        "After RAZORPAY_KEY_ID",
                        "RAZORPAY_KEY_SECRET = os.environ.get('RAZORPAY_KEY_SECRET')",
                        "Razorpay key secret, read at runtime",
                    ),
                    EditItem::new(
                        "In INSTALLED_APPS",
                        "'razorpay_payments',",
                        "Registers the new app",
                    ),
                ],
            ),
            FileAction::manual_edit(
                "urls.py",
                "Mount the Razorpay URLs in the project urls.py",
                vec![
                    EditItem::new(
                        "At the top, with the other django.urls imports",
                        "from django.urls import include, path",
                        "include must be imported before it is used in urlpatterns",
                    ),
                    EditItem::new(
                        "In urlpatterns",
                        "path('api/razorpay/', include('razorpay_payments.urls')),",
                        "Mounts /api/razorpay/order and /api/razorpay/verify - needs the include import above",
                    ),
                ],
            ),
        ]
    }

    fn setup_steps(&self, _language: Language, _frontend: &FrontendArtifact) -> Vec<String> {
        vec![
            "Create the razorpay_payments app with __init__.py, views.py and urls.py".to_string(),
            "Add import os and load_dotenv() at the top of settings.py".to_string(),
            "Add RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET to settings.py and 'razorpay_payments' to INSTALLED_APPS".to_string(),
            "Import include and mount razorpay_payments.urls in the main urls.py".to_string(),
            "Create .env next to manage.py with the Razorpay keys".to_string(),
        ]
    }
}
