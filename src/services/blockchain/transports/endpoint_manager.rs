//! Manages the rotation of chain RPC endpoints
//!
//! Provides methods for rotating between multiple URLs and sending requests
//! to the active endpoint with automatic fallback to other URLs on failure.

use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::blockchain::transports::{
	RotatingTransport, TransportError, ROTATE_ON_ERROR_CODES,
};

/// Outcome of a single request attempt against one URL
#[derive(Debug)]
enum SingleRequestAttemptOutcome {
	/// Successfully got a response (status might still be error)
	Success(reqwest::Response),
	/// Error during send (e.g., connection, timeout)
	NetworkError(reqwest_middleware::Error),
	/// Error serializing the request body
	SerializationError(TransportError),
}

/// Manages the rotation of chain RPC endpoints
///
/// Holds the active URL, the fallback list, and the middleware HTTP client
/// the requests go through. Rotation is serialized behind a lock so
/// concurrent validations do not race each other into the same fallback.
#[derive(Clone, Debug)]
pub struct EndpointManager {
	pub active_url: Arc<RwLock<String>>,
	pub fallback_urls: Arc<RwLock<Vec<String>>>,
	client: ClientWithMiddleware,
	rotation_lock: Arc<tokio::sync::Mutex<()>>,
}

impl EndpointManager {
	/// Creates a new rotating URL client
	///
	/// # Arguments
	/// * `client` - The middleware client to use for requests
	/// * `active_url` - The initial active URL
	/// * `fallback_urls` - A list of fallback URLs to rotate to
	pub fn new(client: ClientWithMiddleware, active_url: &str, fallback_urls: Vec<String>) -> Self {
		Self {
			active_url: Arc::new(RwLock::new(active_url.to_string())),
			fallback_urls: Arc::new(RwLock::new(fallback_urls)),
			rotation_lock: Arc::new(tokio::sync::Mutex::new(())),
			client,
		}
	}

	/// Rotates to the next available fallback URL
	///
	/// # Returns
	/// * `Result<(), TransportError>` - The result of the rotation operation
	pub async fn rotate_url<T: RotatingTransport>(
		&self,
		transport: &T,
	) -> Result<(), TransportError> {
		let _guard = self.rotation_lock.lock().await;

		let current_active = self.active_url.read().await.clone();

		let new_url = {
			let mut fallback_urls = self.fallback_urls.write().await;
			if fallback_urls.is_empty() {
				return Err(TransportError::url_rotation(format!(
					"No fallback URLs available for rotation. Current active URL: {}",
					current_active
				)));
			}

			// Find first URL that's different from current
			match fallback_urls.iter().position(|url| url != &current_active) {
				Some(pos) => fallback_urls.remove(pos),
				None => {
					return Err(TransportError::url_rotation(format!(
						"All fallback URLs are the same as the current active URL: {}",
						current_active
					)));
				}
			}
		};

		if transport.try_connect(&new_url).await.is_ok() {
			transport.update_client(&new_url).await.map_err(|e| {
				TransportError::url_rotation(format!(
					"Failed to update transport client with new URL: {}",
					e
				))
			})?;

			let mut active_url = self.active_url.write().await;
			let mut fallback_urls = self.fallback_urls.write().await;
			tracing::debug!(
				"Successful rotation - from: {}, to: {}",
				current_active,
				new_url
			);
			fallback_urls.push(current_active);
			*active_url = new_url;
			Ok(())
		} else {
			// Retain the unreachable URL in the fallback list
			let mut fallback_urls = self.fallback_urls.write().await;
			fallback_urls.push(new_url.clone());
			Err(TransportError::url_rotation(format!(
				"Failed to connect to new URL: {}",
				new_url
			)))
		}
	}

	/// Whether rotation should be attempted for the given failure, and its
	/// execution if so
	///
	/// # Returns
	/// * `Ok(true)` - Rotation succeeded, caller should retry the request
	/// * `Ok(false)` - No rotation was needed or possible
	/// * `Err(TransportError)` - Rotation was attempted but failed
	async fn should_attempt_rotation<T: RotatingTransport>(
		&self,
		transport: &T,
		should_check_status: bool,
		status: Option<u16>,
	) -> Result<bool, TransportError> {
		let should_rotate = {
			let fallback_urls = self.fallback_urls.read().await;
			!fallback_urls.is_empty()
				&& (!should_check_status
					|| status.is_some_and(|s| ROTATE_ON_ERROR_CODES.contains(&s)))
		};

		if !should_rotate {
			return Ok(false);
		}

		match self.rotate_url(transport).await {
			Ok(_) => Ok(true),
			Err(e) => Err(TransportError::url_rotation(format!(
				"Rotation failed for URL {}: {}",
				self.active_url.read().await,
				e
			))),
		}
	}

	/// Attempts to send a request to the specified URL
	async fn attempt_request_on_url<P>(
		&self,
		url: &str,
		transport: &impl RotatingTransport,
		method: &str,
		params: Option<P>,
	) -> SingleRequestAttemptOutcome
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let request_body = transport.customize_request(method, params).await;

		let request_body_str = match serde_json::to_string(&request_body) {
			Ok(body) => body,
			Err(e) => {
				return SingleRequestAttemptOutcome::SerializationError(
					TransportError::request_serialization(format!(
						"Failed to serialize request JSON: {}",
						e
					)),
				);
			}
		};

		let target_url = transport.request_url(url, method);
		let response_result = self
			.client
			.post(&target_url)
			.header("Content-Type", "application/json")
			.body(request_body_str)
			.send()
			.await;

		match response_result {
			Ok(response) => SingleRequestAttemptOutcome::Success(response),
			Err(network_error) => SingleRequestAttemptOutcome::NetworkError(network_error),
		}
	}

	/// Sends a raw request to the chain endpoint with automatic URL rotation
	/// on failure
	///
	/// # Behavior
	/// - Rotates to a fallback URL on rate-limit statuses (429) and on
	///   network errors, then retries
	/// - Attempts are bounded by the number of configured URLs
	/// - Returns the first successful response or the last error
	pub async fn send_raw_request<T, P>(
		&self,
		transport: &T,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		T: RotatingTransport,
		P: Into<Value> + Send + Clone + Serialize,
	{
		let max_attempts = 1 + self.fallback_urls.read().await.len();

		for attempt in 0..max_attempts {
			let current_url = self.active_url.read().await.clone();

			let attempt_result = self
				.attempt_request_on_url(&current_url, transport, method, params.clone())
				.await;

			match attempt_result {
				SingleRequestAttemptOutcome::Success(response) => {
					let status = response.status();
					if status.is_success() {
						return response.json().await.map_err(|e| {
							TransportError::response_parse(format!(
								"Failed to parse JSON response: {}",
								e
							))
						});
					}

					let error_body = response.text().await.unwrap_or_default();
					tracing::warn!(
						"Request to {} failed with status {} (attempt {}/{})",
						current_url,
						status,
						attempt + 1,
						max_attempts
					);

					let rotated = self
						.should_attempt_rotation(transport, true, Some(status.as_u16()))
						.await?;
					if !rotated {
						return Err(TransportError::http(
							status.as_u16(),
							current_url,
							error_body,
						));
					}
				}
				SingleRequestAttemptOutcome::NetworkError(network_error) => {
					tracing::warn!(
						"Network error while sending request to {} (attempt {}/{}): {}",
						current_url,
						attempt + 1,
						max_attempts,
						network_error
					);

					let rotated = self.should_attempt_rotation(transport, false, None).await?;
					if !rotated {
						return Err(TransportError::network(format!(
							"Failed to send request to {}: {}",
							current_url, network_error
						)));
					}
				}
				SingleRequestAttemptOutcome::SerializationError(serialization_error) => {
					return Err(serialization_error);
				}
			}
		}

		Err(TransportError::url_rotation(
			"Exhausted all configured RPC endpoints".to_string(),
		))
	}
}
