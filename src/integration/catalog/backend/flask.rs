use crate::integration::catalog::{BackendTemplate, Ecosystem, FrontendArtifact, Package};
use crate::integration::plan::{EditItem, FileAction};
use crate::integration::request::{BackendFramework, Language};

const BLUEPRINT: &str = r#"import hashlib
import hmac
import os
import time

import razorpay
from dotenv import load_dotenv
from flask import Blueprint, jsonify, request

load_dotenv()

razorpay_bp = Blueprint('razorpay', __name__, url_prefix='/api/razorpay')
client = razorpay.Client(auth=(os.environ['RAZORPAY_KEY_ID'], os.environ['RAZORPAY_KEY_SECRET']))


@razorpay_bp.route('/order', methods=['POST'])
def create_order():
    try:
        data = request.get_json() or {}
        amount = data.get('amount', 0)

        if amount <= 0:
            return jsonify({'success': False, 'error': 'Invalid amount'}), 400

        order = client.order.create({
            'amount': int(amount * 100),
            'currency': data.get('currency', 'INR'),
            'receipt': data.get('receipt', f'receipt_{int(time.time())}'),
        })

        return jsonify({
            'success': True,
            'orderId': order['id'],
            'amount': order['amount'],
            'currency': order['currency'],
            'keyId': os.environ['RAZORPAY_KEY_ID'],
        })
    except Exception as e:
        return jsonify({'success': False, 'error': str(e)}), 500


@razorpay_bp.route('/verify', methods=['POST'])
def verify_payment():
    try:
        data = request.get_json() or {}
        order_id = data.get('razorpay_order_id')
        payment_id = data.get('razorpay_payment_id')
        signature = data.get('razorpay_signature')

        if not all([order_id, payment_id, signature]):
            return jsonify({'success': False, 'error': 'Missing payment details'}), 400

        expected = hmac.new(
            os.environ['RAZORPAY_KEY_SECRET'].encode(),
            f'{order_id}|{payment_id}'.encode(),
            hashlib.sha256,
        ).hexdigest()

        if hmac.compare_digest(expected, signature):
            return jsonify({'success': True, 'paymentId': payment_id, 'orderId': order_id})
        return jsonify({'success': False, 'error': 'Invalid signature'}), 400
    except Exception as e:
        return jsonify({'success': False, 'error': str(e)}), 500
"#;

pub struct FlaskTemplate;

impl BackendTemplate for FlaskTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Flask
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn packages(&self) -> Vec<Package> {
        vec![Package::new("razorpay"), Package::new("python-dotenv")]
    }

    fn files(&self, _language: Language) -> Vec<FileAction> {
        vec![FileAction::create(
            "razorpay_routes.py",
            BLUEPRINT,
            "Flask blueprint with the Razorpay endpoints",
        )]
    }

    fn wiring(&self, _language: Language) -> Vec<FileAction> {
        vec![FileAction::manual_edit(
            "app.py",
            "Register the Razorpay blueprint in the main Flask app",
            vec![
                EditItem::new(
                    "With the other imports at the top",
                    "from razorpay_routes import razorpay_bp",
                    "The blueprint must be imported before it is registered",
                ),
                EditItem::new(
                    "After app = Flask(__name__)",
                    "app.register_blueprint(razorpay_bp)",
                    "Mounts /api/razorpay/order and /api/razorpay/verify - needs the import above",
                ),
            ],
        )]
    }

    fn setup_steps(&self, _language: Language, _frontend: &FrontendArtifact) -> Vec<String> {
        vec![
            "Create razorpay_routes.py with the Razorpay blueprint".to_string(),
            "Import razorpay_bp and register the blueprint in the main app.py".to_string(),
            "Create .env with the Razorpay keys".to_string(),
        ]
    }
}
