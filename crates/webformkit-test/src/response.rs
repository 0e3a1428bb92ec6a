//! Response wrapper returned by the test client.

use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::{BodyExt, Full};

/// A collected response: status, headers, and body text.
pub struct TestResponse {
	status: StatusCode,
	headers: HeaderMap,
	body: Bytes,
}

impl TestResponse {
	/// Collect a response body into a [`TestResponse`].
	///
	/// # Examples
	///
	/// ```
	/// use webformkit_test::response::TestResponse;
	/// use http::{Response, StatusCode};
	/// use http_body_util::Full;
	/// use bytes::Bytes;
	///
	/// # tokio_test::block_on(async {
	/// let response = Response::builder()
	///     .status(StatusCode::OK)
	///     .body(Full::new(Bytes::from("<html></html>")))
	///     .unwrap();
	/// let response = TestResponse::new(response).await;
	/// assert_eq!(response.status(), StatusCode::OK);
	/// assert_eq!(response.text(), "<html></html>");
	/// # });
	/// ```
	pub async fn new(response: Response<Full<Bytes>>) -> Self {
		let (parts, body) = response.into_parts();
		let body = body
			.collect()
			.await
			.map(|collected| collected.to_bytes())
			.unwrap_or_else(|_| Bytes::new());
		Self {
			status: parts.status,
			headers: parts.headers,
			body,
		}
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// The body as UTF-8 text (lossy).
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	pub fn body(&self) -> &Bytes {
		&self.body
	}

	/// Panic unless the response carries the expected status.
	pub fn assert_status(&self, expected: StatusCode) -> &Self {
		assert_eq!(
			self.status, expected,
			"expected status {expected}, got {} with body: {}",
			self.status,
			self.text()
		);
		self
	}

	/// Panic unless the body contains the given text.
	pub fn assert_contains(&self, needle: &str) -> &Self {
		let text = self.text();
		assert!(
			text.contains(needle),
			"expected body to contain '{needle}', got: {text}"
		);
		self
	}

	/// Panic if the body contains the given text.
	pub fn assert_not_contains(&self, needle: &str) -> &Self {
		let text = self.text();
		assert!(
			!text.contains(needle),
			"expected body to not contain '{needle}', got: {text}"
		);
		self
	}
}
