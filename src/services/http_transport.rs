use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use crate::enums::http_method::HttpMethod;
use crate::enums::transport_error::TransportError;
use crate::errors::HookmenuResult;
use crate::structs::transport::http_request::HttpRequest;
use crate::structs::transport::transport_response::TransportResponse;
use crate::traits::transport::Transport;

const GET_WITH_BODY_MESSAGE: &str = "Request with GET/HEAD method cannot have body";

/// Content type browsers attach to a string body sent without one.
const DEFAULT_BODY_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// reqwest-backed transport. Timeouts are reqwest's defaults.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> HookmenuResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError> {
        if request.method == HttpMethod::Get && request.body.is_some() {
            return Err(TransportError::InvalidRequest(GET_WITH_BODY_MESSAGE.to_string()));
        }

        let mut builder = self.client.request(request.method.into(), request.url.as_str());

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            let has_content_type = request
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
            if !has_content_type {
                builder = builder.header(CONTENT_TYPE, DEFAULT_BODY_CONTENT_TYPE);
            }
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        Ok(TransportResponse::with_status(response.status().as_u16()))
    }
}
