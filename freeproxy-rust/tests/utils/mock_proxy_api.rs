use std::sync::{Arc, Mutex};

use uuid::Uuid;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

const PROXIES_PATH: &str = "/v1/proxies";

pub struct EndpointStub {
    pub response: String,
    pub status: u16,
}

impl Default for EndpointStub {
    fn default() -> Self {
        EndpointStub {
            response: "[]".to_string(),
            status: 200,
        }
    }
}

/// In-process stand-in for the proxy listing API. Each instance serves a
/// uuid-prefixed copy of the endpoint and records every request it receives.
pub struct MockProxyApi {
    uuid: String,
    mock_server: MockServer,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockProxyApi {
    pub async fn new() -> MockProxyApi {
        let mock_server = MockServer::start().await;

        MockProxyApi {
            uuid: Uuid::new_v4().to_string(),
            mock_server,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn stub(&self, stub: EndpointStub) {
        let reqs = self.requests.clone();

        Mock::given(method("GET"))
            .and(path(format!("/{}{}", self.uuid, PROXIES_PATH)))
            .respond_with(move |req: &Request| {
                reqs.lock().unwrap().push(req.clone());

                ResponseTemplate::new(stub.status).set_body_string(stub.response.clone())
            })
            .mount(&self.mock_server)
            .await;
    }

    pub fn proxies_url(&self) -> String {
        format!("{}/{}{}", self.mock_server.uri(), self.uuid, PROXIES_PATH)
    }

    pub fn times_called(&self) -> u32 {
        self.requests.lock().unwrap().len() as u32
    }

    pub fn get_requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}
