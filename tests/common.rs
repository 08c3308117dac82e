//! Test helper utilities for reqres-api-suite integration tests
//!
//! Provides a wiremock server that serves the same routes and data shapes as
//! the public service, plus tracing setup shared by every test binary.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use reqres_api_suite::{ApiClient, SuiteConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Path prefix the mock serves under, like the real `/api`
pub const API_PREFIX: &str = "/api";

const PER_PAGE: usize = 6;

const USERS: &[(u64, &str, &str)] = &[
    (1, "George", "Bluth"),
    (2, "Janet", "Weaver"),
    (3, "Emma", "Wong"),
    (4, "Eve", "Holt"),
    (5, "Charles", "Morris"),
    (6, "Tracey", "Ramos"),
    (7, "Michael", "Lawson"),
    (8, "Lindsay", "Ferguson"),
    (9, "Tobias", "Funke"),
    (10, "Byron", "Fields"),
    (11, "George", "Edwards"),
    (12, "Rachel", "Howell"),
];

const RESOURCES: &[(u64, &str, u64, &str, &str)] = &[
    (1, "cerulean", 2000, "#98B2D1", "15-4020"),
    (2, "fuchsia rose", 2001, "#C74375", "17-2031"),
    (3, "true red", 2002, "#BF1932", "19-1664"),
    (4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
    (5, "tigerlily", 2004, "#E2583E", "17-1456"),
    (6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
    (7, "sand dollar", 2006, "#DECDBE", "13-1106"),
    (8, "chili pepper", 2007, "#9B1B30", "19-1557"),
    (9, "blue iris", 2008, "#5A5B9F", "18-3943"),
    (10, "mimosa", 2009, "#F0C05A", "14-0848"),
    (11, "turquoise", 2010, "#45B5AA", "15-5519"),
    (12, "honeysuckle", 2011, "#D94F70", "18-2120"),
];

/// Install a test-friendly tracing subscriber once per test binary
///
/// `RUST_LOG` overrides the default `reqres_api_suite=debug` filter.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reqres_api_suite=debug"));

    // Ignore the error from a second install in the same binary
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(filter)
        .try_init();
}

pub fn user_json(id: u64) -> Option<Value> {
    USERS
        .iter()
        .find(|(user_id, _, _)| *user_id == id)
        .map(|(id, first, last)| {
            json!({
                "id": id,
                "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
                "first_name": first,
                "last_name": last,
                "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg")
            })
        })
}

pub fn resource_json(id: u64) -> Option<Value> {
    RESOURCES
        .iter()
        .find(|(resource_id, ..)| *resource_id == id)
        .map(|(id, name, year, color, pantone)| {
            json!({
                "id": id,
                "name": name,
                "year": year,
                "color": color,
                "pantone_value": pantone
            })
        })
}

fn page_of(items: Vec<Value>, page: usize) -> Value {
    let total = items.len();
    let data: Vec<Value> = items
        .into_iter()
        .skip((page.saturating_sub(1)) * PER_PAGE)
        .take(PER_PAGE)
        .collect();
    json!({
        "page": page,
        "per_page": PER_PAGE,
        "total": total,
        "total_pages": total.div_ceil(PER_PAGE),
        "data": data,
        "support": {
            "url": "https://contentcaddy.io",
            "text": "Tired of writing endless social media content?"
        }
    })
}

pub fn user_page(page: usize) -> Value {
    let users = USERS.iter().filter_map(|(id, ..)| user_json(*id)).collect();
    page_of(users, page)
}

pub fn resource_page(page: usize) -> Value {
    let resources = RESOURCES
        .iter()
        .filter_map(|(id, ..)| resource_json(*id))
        .collect();
    page_of(resources, page)
}

fn trailing_id(request: &Request) -> Option<u64> {
    request
        .url
        .path_segments()
        .and_then(|segments| segments.last())
        .and_then(|segment| segment.parse().ok())
}

/// Serves `{"data": ...}` for a known id and `404 {}` otherwise
struct DetailResponder {
    lookup: fn(u64) -> Option<Value>,
}

impl Respond for DetailResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match trailing_id(request).and_then(self.lookup) {
            Some(data) => ResponseTemplate::new(200).set_body_json(json!({ "data": data })),
            None => ResponseTemplate::new(404).set_body_json(json!({})),
        }
    }
}

/// Echoes the submitted fields with an id and timestamp, like `POST /users`
pub struct EchoCreatedUser;

impl Respond for EchoCreatedUser {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value = serde_json::from_slice(&request.body).unwrap_or_else(|_| json!({}));
        if let Some(fields) = body.as_object_mut() {
            fields.insert("id".to_string(), json!(fastrand::u32(100..1000).to_string()));
            fields.insert("createdAt".to_string(), json!("2025-01-20T10:22:13.123Z"));
        }
        ResponseTemplate::new(201).set_body_json(body)
    }
}

/// Start a mock of the service with every route the suite touches
pub async fn start_reqres_mock() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/users")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page(2)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(format!(r"^{API_PREFIX}/users/\d+$")))
        .respond_with(DetailResponder { lookup: user_json })
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/users")))
        .respond_with(EchoCreatedUser)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(format!(r"^{API_PREFIX}/users/\d+$")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/unknown")))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource_page(1)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(format!(r"^{API_PREFIX}/unknown/\d+$")))
        .respond_with(DetailResponder {
            lookup: resource_json,
        })
        .mount(&server)
        .await;

    server
}

/// Client bound to `{server}/api`
pub fn client_for(server: &MockServer) -> ApiClient {
    let config = SuiteConfig::with_base_url(format!("{}{API_PREFIX}", server.uri()));
    ApiClient::new(&config).expect("Mock server URI should form a valid config")
}
