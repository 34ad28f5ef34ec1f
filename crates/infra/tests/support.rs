use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use lookcircuit_core::{MemoryTokenStore, SessionContext};
use lookcircuit_domain::{ApiConfig, AppConfig, IdentityConfig};
use lookcircuit_infra::{ApiClient, ClientContext};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

pub const ANON_KEY: &str = "test-anon-key";

/// Route test logs through the libtest capture.
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("lookcircuit_infra=debug,lookcircuit_core=debug")
            .with_test_writer()
            .try_init();
    });
}

/// API config pointing at the mock server with retries off
pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig::with_base_url(server.uri())
}

/// App config with both the API and the identity provider on `server`
pub fn app_config(server: &MockServer) -> AppConfig {
    AppConfig {
        api: api_config(server),
        identity: IdentityConfig { url: server.uri(), anon_key: ANON_KEY.to_string() },
    }
}

pub fn api_client(config: ApiConfig, token: Option<&str>) -> ApiClient {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    ApiClient::new(config, SessionContext::new(Arc::new(store))).expect("api client")
}

/// Full client over a memory store; the store is returned for inspection
pub fn client_context(server: &MockServer, token: Option<&str>) -> (ClientContext, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let context = ClientContext::new(app_config(server), store.clone()).expect("client context");
    (context, store)
}

/// Image file kept alive for the duration of a test
pub struct TestImage {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestImage {
    pub fn new(file_name: &str) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join(file_name);
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
            .expect("image fixture should be written");
        Self { path, _dir: dir }
    }
}

pub fn analysis_json() -> Value {
    json!({
        "detected": true,
        "skin_tone": { "fitzpatrick_type": 3, "undertone": "warm", "hex_color": "#c68642" },
        "face_shape": { "shape": "oval", "confidence": 0.91 },
        "hair_coverage": { "level": "full", "confidence": 0.88 },
        "color_season": "autumn",
        "timestamp": "2025-05-01T12:00:00"
    })
}

pub fn product_json(id: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "brand": "Atelier",
        "price": 59.9,
        "currency": "EUR",
        "image_url": format!("https://cdn.example.com/{id}.jpg"),
        "product_url": format!("https://shop.example.com/{id}"),
        "category": category,
        "colors": ["#000080"],
        "rating": 4.5,
        "in_stock": true
    })
}

pub fn recommendations_json() -> Value {
    json!({
        "color_palette": {
            "season": "autumn",
            "best_colors": ["#8B4513", "#556B2F"],
            "neutral_colors": ["#F5F5DC"],
            "avoid_colors": ["#FF69B4"]
        },
        "style": {
            "necklines": ["v-neck"],
            "patterns": ["herringbone"],
            "fits": ["tailored"],
            "fabrics": ["wool"]
        },
        "grooming": {
            "hairstyles": ["textured crop"],
            "beard_styles": ["short boxed"],
            "tips": ["moisturize daily"]
        },
        "reasoning": "Warm undertones suit earthy autumn shades."
    })
}

pub fn session_json(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-token",
        "user": {
            "id": "user-1",
            "email": "ada@example.com",
            "user_metadata": { "name": "Ada" },
            "created_at": "2025-01-07T10:15:00Z"
        }
    })
}
