//! # REST Handlers
//!
//! Thin adapters between axum extractors and the application services.

use crate::api::rest::classifier::{ApiError, CryptoApiError};
use crate::application::dto::{CreateCurrencyRequest, CurrencyDto, UpdateCurrencyRequest};
use crate::application::envelope::ResponseEnvelope;
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::services::{CipherService, CurrencyService, QuoteService, RsaKeyPair};
use crate::domain::entities::{ExternalQuote, TransformedQuote};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote retrieval and transformation.
    pub quotes: QuoteService,
    /// Currency reference data.
    pub currencies: CurrencyService,
    /// Symmetric and asymmetric ciphers.
    pub cipher: CipherService,
}

type Envelope<T> = Json<ResponseEnvelope<T>>;

// ============================================================================
// Request Types
// ============================================================================

/// Body of the encrypt endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    /// Text to encrypt.
    pub plain_text: Option<String>,
    /// AES passphrase.
    pub key: Option<String>,
    /// RSA public key, base64 PKCS#1 DER.
    pub public_key: Option<String>,
}

/// Body of the decrypt endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    /// Base64 ciphertext.
    pub cipher_text: Option<String>,
    /// AES passphrase.
    pub key: Option<String>,
    /// RSA private key, base64 PKCS#1 DER.
    pub private_key: Option<String>,
}

fn required<'a>(value: Option<&'a str>, name: &str) -> ServiceResult<&'a str> {
    value.ok_or_else(|| ServiceError::missing_argument(name))
}

fn aes_encrypt_with(cipher: &CipherService, request: &EncryptRequest) -> ServiceResult<String> {
    let plain_text = required(request.plain_text.as_deref(), "plainText")?;
    let key = required(request.key.as_deref(), "key")?;
    cipher.encrypt_aes(plain_text, key)
}

fn aes_decrypt_with(cipher: &CipherService, request: &DecryptRequest) -> ServiceResult<String> {
    let cipher_text = required(request.cipher_text.as_deref(), "cipherText")?;
    let key = required(request.key.as_deref(), "key")?;
    cipher.decrypt_aes(cipher_text, key)
}

fn rsa_encrypt_with(cipher: &CipherService, request: &EncryptRequest) -> ServiceResult<String> {
    let plain_text = required(request.plain_text.as_deref(), "plainText")?;
    let public_key = required(request.public_key.as_deref(), "publicKey")?;
    cipher.encrypt_rsa(plain_text, public_key)
}

fn rsa_decrypt_with(cipher: &CipherService, request: &DecryptRequest) -> ServiceResult<String> {
    let cipher_text = required(request.cipher_text.as_deref(), "cipherText")?;
    let private_key = required(request.private_key.as_deref(), "privateKey")?;
    cipher.decrypt_rsa(cipher_text, private_key)
}

// ============================================================================
// Quote Handlers
// ============================================================================

/// `GET /quote/original`
pub async fn get_original_quote(State(state): State<Arc<AppState>>) -> Envelope<ExternalQuote> {
    let quote = state.quotes.original_quote().await;
    Json(ResponseEnvelope::success(
        quote,
        "Original quote data retrieved successfully",
    ))
}

/// `GET /quote/transformed`
///
/// # Errors
///
/// Returns an [`ApiError`] if reference data cannot be read.
pub async fn get_transformed_quote(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<TransformedQuote>, ApiError> {
    let quote = state.quotes.transformed_quote().await?;
    Ok(Json(ResponseEnvelope::success(
        quote,
        "Transformed quote data retrieved successfully",
    )))
}

// ============================================================================
// Currency Handlers
// ============================================================================

/// `GET /currencies`
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> Response {
    let envelope = state.currencies.get_all().await;
    status_or(envelope, StatusCode::OK, StatusCode::BAD_REQUEST)
}

/// `GET /currencies/{id}`
pub async fn get_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let envelope = state.currencies.get(&id).await;
    status_or(envelope, StatusCode::OK, StatusCode::NOT_FOUND)
}

/// `POST /currencies`
///
/// # Errors
///
/// Returns an [`ApiError`] if the body is not valid JSON.
pub async fn create_currency(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateCurrencyRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    if let Err(errors) = request.validate() {
        return Ok(validation_failed::<CurrencyDto>(errors));
    }

    let envelope = state.currencies.create(request).await;
    let Some(id) = envelope.data.as_ref().map(|dto| dto.id.clone()) else {
        return Ok((StatusCode::BAD_REQUEST, Json(envelope)).into_response());
    };

    let mut response = (StatusCode::CREATED, Json(envelope)).into_response();
    if let Ok(location) = HeaderValue::from_str(&format!("/currencies/{id}")) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}

/// `PUT /currencies/{id}`
///
/// # Errors
///
/// Returns an [`ApiError`] if the body is not valid JSON.
pub async fn update_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCurrencyRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    if let Err(errors) = request.validate() {
        return Ok(validation_failed::<CurrencyDto>(errors));
    }

    let envelope = state.currencies.update(&id, request).await;
    Ok(status_or(envelope, StatusCode::OK, StatusCode::NOT_FOUND))
}

/// `DELETE /currencies/{id}`
pub async fn delete_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let envelope = state.currencies.delete(&id).await;
    status_or(envelope, StatusCode::OK, StatusCode::NOT_FOUND)
}

fn status_or<T: Serialize>(
    envelope: ResponseEnvelope<T>,
    ok: StatusCode,
    failed: StatusCode,
) -> Response {
    let status = if envelope.success { ok } else { failed };
    (status, Json(envelope)).into_response()
}

fn validation_failed<T: Serialize>(errors: Vec<String>) -> Response {
    let envelope: ResponseEnvelope<T> = ResponseEnvelope::error("Validation failed", errors);
    (StatusCode::BAD_REQUEST, Json(envelope)).into_response()
}

// ============================================================================
// Encryption Handlers
// ============================================================================

fn crypto_body<T>(
    operation: &'static str,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, CryptoApiError> {
    body.map(|Json(request)| request).map_err(|rejection| {
        CryptoApiError::new(operation, ServiceError::invalid_argument(rejection.body_text()))
    })
}

/// `POST /encryption/aes/encrypt`
///
/// # Errors
///
/// Returns a [`CryptoApiError`] on missing fields or cipher failure.
pub async fn aes_encrypt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EncryptRequest>, JsonRejection>,
) -> Result<Envelope<String>, CryptoApiError> {
    const OP: &str = "aes-encrypt";
    let request = crypto_body(OP, body)?;
    let cipher_text =
        aes_encrypt_with(&state.cipher, &request).map_err(|e| CryptoApiError::new(OP, e))?;
    Ok(Json(ResponseEnvelope::success(
        cipher_text,
        "Text encrypted successfully",
    )))
}

/// `POST /encryption/aes/decrypt`
///
/// # Errors
///
/// Returns a [`CryptoApiError`] on missing fields or cipher failure.
pub async fn aes_decrypt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Result<Envelope<String>, CryptoApiError> {
    const OP: &str = "aes-decrypt";
    let request = crypto_body(OP, body)?;
    let plain_text =
        aes_decrypt_with(&state.cipher, &request).map_err(|e| CryptoApiError::new(OP, e))?;
    Ok(Json(ResponseEnvelope::success(
        plain_text,
        "Text decrypted successfully",
    )))
}

/// `POST /encryption/rsa/generate-keys`
///
/// Key generation is CPU bound and runs on the blocking pool.
///
/// # Errors
///
/// Returns a [`CryptoApiError`] if generation fails.
pub async fn rsa_generate_keys(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<RsaKeyPair>, CryptoApiError> {
    const OP: &str = "rsa-generate-keys";
    let cipher = state.cipher;
    let pair = tokio::task::spawn_blocking(move || cipher.generate_rsa_key_pair())
        .await
        .map_err(|e| CryptoApiError::new(OP, ServiceError::internal(e.to_string())))?
        .map_err(|e| CryptoApiError::new(OP, e))?;
    Ok(Json(ResponseEnvelope::success(
        pair,
        "RSA key pair generated successfully",
    )))
}

/// `POST /encryption/rsa/encrypt`
///
/// # Errors
///
/// Returns a [`CryptoApiError`] on missing fields or cipher failure.
pub async fn rsa_encrypt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EncryptRequest>, JsonRejection>,
) -> Result<Envelope<String>, CryptoApiError> {
    const OP: &str = "rsa-encrypt";
    let request = crypto_body(OP, body)?;
    let cipher_text =
        rsa_encrypt_with(&state.cipher, &request).map_err(|e| CryptoApiError::new(OP, e))?;
    Ok(Json(ResponseEnvelope::success(
        cipher_text,
        "Text encrypted successfully",
    )))
}

/// `POST /encryption/rsa/decrypt`
///
/// # Errors
///
/// Returns a [`CryptoApiError`] on missing fields or cipher failure.
pub async fn rsa_decrypt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Result<Envelope<String>, CryptoApiError> {
    const OP: &str = "rsa-decrypt";
    let request = crypto_body(OP, body)?;
    let plain_text =
        rsa_decrypt_with(&state.cipher, &request).map_err(|e| CryptoApiError::new(OP, e))?;
    Ok(Json(ResponseEnvelope::success(
        plain_text,
        "Text decrypted successfully",
    )))
}
