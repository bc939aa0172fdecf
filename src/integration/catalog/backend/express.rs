use super::script_extension;
use crate::integration::catalog::{
    render, BackendTemplate, Ecosystem, FrontendArtifact, Package,
};
use crate::integration::plan::{EditItem, FileAction};
use crate::integration::request::{BackendFramework, Language};

const ROUTES: &str = r#"__IMPORTS__

const router = express.Router();

const razorpay = new Razorpay({
  key_id: process.env.RAZORPAY_KEY_ID__BANG__,
  key_secret: process.env.RAZORPAY_KEY_SECRET__BANG__,
});

// Create Razorpay order
router.post('/order', async (__REQ__, __RES__) => {
  try {
    const { amount, currency = 'INR', receipt } = req.body;

    if (!amount || amount <= 0) {
      return res.status(400).json({ success: false, error: 'Invalid amount' });
    }

    const order = await razorpay.orders.create({
      amount: Math.round(amount * 100), // paise
      currency,
      receipt: receipt || `receipt_${Date.now()}`,
    });

    res.json({
      success: true,
      orderId: order.id,
      amount: order.amount,
      currency: order.currency,
      keyId: process.env.RAZORPAY_KEY_ID,
    });
  } catch (error) {
    console.error('Razorpay order creation failed:', error);
    res.status(500).json({ success: false, error: 'Failed to create payment order' });
  }
});

// Verify payment signature
router.post('/verify', (__REQ__, __RES__) => {
  try {
    const { razorpay_order_id, razorpay_payment_id, razorpay_signature } = req.body;

    if (!razorpay_order_id || !razorpay_payment_id || !razorpay_signature) {
      return res.status(400).json({ success: false, error: 'Missing payment details' });
    }

    const expectedSignature = crypto
      .createHmac('sha256', process.env.RAZORPAY_KEY_SECRET__BANG__)
      .update(razorpay_order_id + '|' + razorpay_payment_id)
      .digest('hex');

    const expected = Buffer.from(expectedSignature);
    const received = Buffer.from(razorpay_signature);

    if (expected.length === received.length && crypto.timingSafeEqual(expected, received)) {
      res.json({
        success: true,
        message: 'Payment verified successfully',
        paymentId: razorpay_payment_id,
        orderId: razorpay_order_id,
      });
    } else {
      res.status(400).json({ success: false, error: 'Invalid payment signature' });
    }
  } catch (error) {
    console.error('Payment verification failed:', error);
    res.status(500).json({ success: false, error: 'Payment verification failed' });
  }
});

__EXPORT__
"#;

const JS_IMPORTS: &str = "const express = require('express');
const Razorpay = require('razorpay');
const crypto = require('crypto');";

const TS_IMPORTS: &str = "import express, { Request, Response } from 'express';
import Razorpay from 'razorpay';
import crypto from 'crypto';";

const MOUNT_LINE: &str = "app.use('/api/razorpay', razorpayRoutes);";

/// The three lines wiring the routes into the server entry point, in
/// application order: load env, import routes, mount routes
pub fn server_lines(language: Language) -> [&'static str; 3] {
    if language.is_typed() {
        [
            "import 'dotenv/config';",
            "import razorpayRoutes from './routes/razorpay';",
            MOUNT_LINE,
        ]
    } else {
        [
            "require('dotenv').config();",
            "const razorpayRoutes = require('./routes/razorpay');",
            MOUNT_LINE,
        ]
    }
}

pub struct ExpressTemplate;

impl ExpressTemplate {
    fn server_file(language: Language) -> String {
        format!("server.{}", script_extension(language.is_typed()))
    }

    fn routes_file(language: Language) -> String {
        format!("routes/razorpay.{}", script_extension(language.is_typed()))
    }
}

impl BackendTemplate for ExpressTemplate {
    fn id(&self) -> BackendFramework {
        BackendFramework::Express
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn packages(&self) -> Vec<Package> {
        vec![Package::new("razorpay"), Package::new("dotenv")]
    }

    fn files(&self, language: Language) -> Vec<FileAction> {
        let vars: [(&str, &str); 5] = if language.is_typed() {
            [
                ("IMPORTS", TS_IMPORTS),
                ("BANG", "!"),
                ("REQ", "req: Request"),
                ("RES", "res: Response"),
                ("EXPORT", "export default router;"),
            ]
        } else {
            [
                ("IMPORTS", JS_IMPORTS),
                ("BANG", ""),
                ("REQ", "req"),
                ("RES", "res"),
                ("EXPORT", "module.exports = router;"),
            ]
        };

        vec![FileAction::create(
            Self::routes_file(language),
            render(ROUTES, &vars),
            "Razorpay API routes for order creation and payment verification",
        )]
    }

    fn wiring(&self, language: Language) -> Vec<FileAction> {
        let [dotenv, import, mount] = server_lines(language);
        let server = Self::server_file(language);

        let setup = format!(
            "// Add these lines at the TOP of {server} (before other code):\n{dotenv}\n{import}\n\n\
             // Add this line with your other app.use() middleware, after express.json():\n// {mount}\n"
        );

        vec![FileAction::insert_code(
            server.clone(),
            Some(setup),
            format!("Add Razorpay setup to {server} - MUST be done in this exact order"),
            vec![
                EditItem::new(
                    format!("STEP 1 - At the VERY TOP of {server} (line 1, before any other code)"),
                    dotenv,
                    "Must be the first line so env vars are loaded before anything reads them",
                ),
                EditItem::new(
                    "STEP 2 - Immediately after dotenv, with the other imports at the top",
                    import,
                    "The import MUST come before its use below",
                ),
                EditItem::new(
                    "STEP 3 - Later in the file, with the other app.use() middleware registrations",
                    mount,
                    "Uses razorpayRoutes - MUST come AFTER the import from step 2",
                ),
            ],
        )]
    }

    fn setup_steps(&self, language: Language, frontend: &FrontendArtifact) -> Vec<String> {
        let [dotenv, import, mount] = server_lines(language);
        vec![
            format!("Create {} (backend routes file)", Self::routes_file(language)),
            format!("Create {} (frontend file)", frontend.file_name),
            "Create .env with the provided RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET".to_string(),
            format!(
                "Edit {} (or the main server file) - IMPORTANT ORDER:\n   \
                 a) Add at the TOP (line 1): {dotenv}\n   \
                 b) Add after dotenv, with the other imports: {import}\n   \
                 c) Add LATER with the middleware (after express.json()): {mount}",
                Self::server_file(language)
            ),
        ]
    }
}
