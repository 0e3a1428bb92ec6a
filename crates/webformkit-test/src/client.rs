//! In-process test client.
//!
//! Simulates `GET`/`POST` against a form registry without sockets: requests
//! are routed to a [`RequestHandler`] closure, the same shape an in-process
//! server handler has, and responses come back as [`TestResponse`]s.

use std::sync::Arc;

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use thiserror::Error;
use tracing::debug;

use webformkit_elements::{FormRegistry, SubmissionInput, process_submission};

use crate::response::TestResponse;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("HTTP error: {0}")]
	Http(#[from] http::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Handler the client dispatches every request to.
pub type RequestHandler = Arc<dyn Fn(Request<Bytes>) -> Response<Full<Bytes>> + Send + Sync>;

/// Test client over an in-process handler.
///
/// # Examples
///
/// ```
/// use webformkit_test::{fixture_registry, WebformClient};
/// use http::StatusCode;
///
/// # tokio_test::block_on(async {
/// let client = WebformClient::for_registry(fixture_registry());
/// let response = client.get("/webform/test_element_excluded_columns").await.unwrap();
/// assert_eq!(response.status(), StatusCode::OK);
/// let missing = client.get("/webform/no_such_form").await.unwrap();
/// assert_eq!(missing.status(), StatusCode::NOT_FOUND);
/// # });
/// ```
pub struct WebformClient {
	base_url: String,
	handler: RequestHandler,
}

impl WebformClient {
	/// A client whose handler serves the given registry:
	/// `GET /webform/{id}` renders the form page, `POST /webform/{id}` runs
	/// the submission pipeline (validation errors re-render the page with
	/// messages), anything else is 404.
	pub fn for_registry(registry: FormRegistry) -> Self {
		let registry = Arc::new(registry);
		Self::with_handler(Arc::new(move |request| route(&registry, request)))
	}

	pub fn with_handler(handler: RequestHandler) -> Self {
		Self {
			base_url: "http://testserver".to_string(),
			handler,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub async fn get(&self, path: &str) -> ClientResult<TestResponse> {
		debug!(%path, "GET");
		let request = Request::builder()
			.method(Method::GET)
			.uri(format!("{}{}", self.base_url, path))
			.body(Bytes::new())?;
		Ok(TestResponse::new((self.handler)(request)).await)
	}

	/// Post submitted field values as the flat path → value mapping the
	/// submission pipeline binds.
	pub async fn post_form(
		&self,
		path: &str,
		input: &SubmissionInput,
	) -> ClientResult<TestResponse> {
		debug!(%path, fields = input.fields().len(), "POST");
		let mut body = serde_json::Map::new();
		for (field, value) in input.fields() {
			body.insert(field.clone(), value.clone());
		}
		let request = Request::builder()
			.method(Method::POST)
			.uri(format!("{}{}", self.base_url, path))
			.header(http::header::CONTENT_TYPE, "application/json")
			.body(Bytes::from(serde_json::to_vec(&serde_json::Value::Object(
				body,
			))?))?;
		Ok(TestResponse::new((self.handler)(request)).await)
	}
}

fn route(registry: &FormRegistry, request: Request<Bytes>) -> Response<Full<Bytes>> {
	let path = request.uri().path().to_string();
	let Some(form_id) = path.strip_prefix("/webform/") else {
		return plain(StatusCode::NOT_FOUND, format!("no route for {path}"));
	};
	let definition = match registry.get(form_id) {
		Ok(definition) => definition,
		Err(error) => return plain(StatusCode::NOT_FOUND, error.to_string()),
	};

	if request.method() == Method::GET {
		html(StatusCode::OK, definition.render_form())
	} else if request.method() == Method::POST {
		let input = match decode_input(request.body()) {
			Ok(input) => input,
			Err(error) => return plain(StatusCode::BAD_REQUEST, error.to_string()),
		};
		match process_submission(definition, registry.entities(), &input) {
			Ok(outcome) => html(StatusCode::OK, outcome.markup),
			// Validation failures re-render the page, still a 200.
			Err(rejection) => html(StatusCode::OK, rejection.markup),
		}
	} else {
		plain(
			StatusCode::METHOD_NOT_ALLOWED,
			"method not allowed".to_string(),
		)
	}
}

fn decode_input(bytes: &Bytes) -> Result<SubmissionInput, serde_json::Error> {
	if bytes.is_empty() {
		return Ok(SubmissionInput::new());
	}
	let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
	let mut input = SubmissionInput::new();
	for (path, value) in fields {
		input.insert(path, value);
	}
	Ok(input)
}

fn html(status: StatusCode, body: String) -> Response<Full<Bytes>> {
	Response::builder()
		.status(status)
		.header(http::header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Full::new(Bytes::from(body)))
		.unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

fn plain(status: StatusCode, body: String) -> Response<Full<Bytes>> {
	Response::builder()
		.status(status)
		.header(http::header::CONTENT_TYPE, "text/plain; charset=utf-8")
		.body(Full::new(Bytes::from(body)))
		.unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
