//! Signed Payment Callbacks
//!
//! A hosted provider reports settled payments by POSTing a JSON payload
//! with a hex HMAC-SHA256 signature of the raw body in a header.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::{PaymentError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature
pub const SIGNATURE_HEADER: &str = "x-payment-signature";

/// Settlement status reported by the provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackStatus {
    Succeeded,
    Failed,
    #[serde(other)]
    Other,
}

/// Parsed callback payload
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCallback {
    pub session_id: String,

    pub status: CallbackStatus,

    /// Provider-side payment reference
    #[serde(default)]
    pub reference: Option<String>,
}

impl PaymentCallback {
    pub fn is_success(&self) -> bool {
        self.status == CallbackStatus::Succeeded
    }
}

/// Verifies callback signatures against a shared secret
pub struct CallbackVerifier {
    secret: String,
}

impl CallbackVerifier {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(PaymentError::Config("callback secret is empty".into()));
        }
        Ok(Self { secret })
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| PaymentError::Config(e.to_string()))
    }

    /// Hex signature for `body`
    pub fn sign(&self, body: &[u8]) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check the signature and parse the payload
    pub fn verify(&self, body: &[u8], signature: &str) -> Result<PaymentCallback> {
        let expected = hex::decode(signature.trim())
            .map_err(|e| PaymentError::Signature(format!("not hex: {e}")))?;

        let mut mac = self.mac()?;
        mac.update(body);
        mac.verify_slice(&expected)
            .map_err(|_| PaymentError::Signature("mismatch".into()))?;

        serde_json::from_slice(body).map_err(|e| PaymentError::CallbackParse(e.to_string()))
    }
}
