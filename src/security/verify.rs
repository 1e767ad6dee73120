use subtle::ConstantTimeEq;

use crate::domain::models::VerificationRequest;

const SUBSCRIBE_MODE: &str = "subscribe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    UnsupportedMode,
    InvalidToken,
}

/// Checks the platform's subscription handshake and hands back the challenge
/// to echo on success.
pub fn verify_subscription<'a>(
    request: &'a VerificationRequest,
    expected_token: &str,
) -> Result<&'a str, VerificationFailure> {
    if request.mode != SUBSCRIBE_MODE {
        return Err(VerificationFailure::UnsupportedMode);
    }

    if request
        .token
        .as_bytes()
        .ct_eq(expected_token.as_bytes())
        .into()
    {
        Ok(request.challenge.as_str())
    } else {
        Err(VerificationFailure::InvalidToken)
    }
}
