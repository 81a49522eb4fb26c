use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// A port nothing listens on, so the remote clients fail fast.
fn dead_endpoint() -> String {
    format!("http://127.0.0.1:{}", pick_free_port())
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/duas")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_jannahway"))
        .env("PORT", port.to_string())
        .env("QURAN_API_URL", dead_endpoint())
        .env("PRAYER_API_URL", dead_endpoint())
        .env("HTTP_TIMEOUT_SECS", "2")
        .env("REPORT_PAGE_ROWS", "2")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn new_session(client: &Client, server: &TestServer) -> String {
    let response = client
        .post(format!("{}/api/sessions", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

async fn act(client: &Client, server: &TestServer, id: &str, action: Value) -> Value {
    let response = client
        .post(format!("{}/api/sessions/{id}/actions", server.base_url))
        .json(&action)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

fn count_of(state: &Value, phrase: &str) -> Option<u64> {
    state["visible"]
        .as_array()?
        .iter()
        .find(|row| row["phrase"] == phrase)
        .and_then(|row| row["count"].as_u64())
}

#[tokio::test]
async fn http_counting_updates_statistics() {
    let server = shared_server().await;
    let client = Client::new();
    let id = new_session(&client, &server).await;
    let phrase = "SubhanAllah (سبحان الله)";

    for _ in 0..3 {
        act(&client, &server, &id, json!({ "action": "increment", "phrase": phrase })).await;
    }
    let state = act(&client, &server, &id, json!({ "action": "get_visible" })).await;
    assert_eq!(count_of(&state, phrase), Some(3));
    assert!(state["status"].is_null());

    let stats: Value = client
        .get(format!("{}/api/sessions/{id}/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["most_recited"]["phrase"], phrase);
}

#[tokio::test]
async fn http_custom_phrase_duplicates_are_warnings() {
    let server = shared_server().await;
    let client = Client::new();
    let id = new_session(&client, &server).await;

    let state = act(&client, &server, &id, json!({ "action": "add_custom", "text": "My dhikr" })).await;
    assert_eq!(state["status"]["kind"], "ok");
    assert_eq!(count_of(&state, "My dhikr"), Some(0));

    let state = act(&client, &server, &id, json!({ "action": "add_custom", "text": "My dhikr" })).await;
    assert_eq!(state["status"]["kind"], "warning");

    let state = act(&client, &server, &id, json!({ "action": "add_custom", "text": "  " })).await;
    assert_eq!(state["status"]["kind"], "warning");
}

#[tokio::test]
async fn http_export_then_import_restores_counts() {
    let server = shared_server().await;
    let client = Client::new();
    let source = new_session(&client, &server).await;

    act(&client, &server, &source, json!({ "action": "add_custom", "text": "Note: colon" })).await;
    for (phrase, times) in [("Bismillah (بسم الله)", 2), ("Note: colon", 5), ("Alhamdulillah (الحمد لله)", 1)] {
        for _ in 0..times {
            act(&client, &server, &source, json!({ "action": "increment", "phrase": phrase })).await;
        }
    }

    let response = client
        .get(format!("{}/api/sessions/{source}/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let disposition = response.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"dhikr-report-"));
    let report = response.text().await.unwrap();
    assert!(report.contains("# Page 2 of 2"));
    assert!(report.trim_end().ends_with("# Total: 8"));

    let target = new_session(&client, &server).await;
    let state: Value = client
        .post(format!("{}/api/sessions/{target}/import", server.base_url))
        .body(report)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["imported"]["merged"], 3);
    assert_eq!(count_of(&state, "Note: colon"), Some(5));
    assert_eq!(count_of(&state, "Bismillah (بسم الله)"), Some(2));
}

#[tokio::test]
async fn http_bad_import_is_rejected_whole() {
    let server = shared_server().await;
    let client = Client::new();
    let id = new_session(&client, &server).await;
    let phrase = "Allahu Akbar (الله أكبر)";
    act(&client, &server, &id, json!({ "action": "increment", "phrase": phrase })).await;

    let state = act(
        &client,
        &server,
        &id,
        json!({ "action": "import", "text": format!("{phrase}:5\nB:notanumber\n") }),
    )
    .await;
    assert_eq!(state["status"]["kind"], "error");
    assert!(state["status"]["message"].as_str().unwrap().contains("B:notanumber"));
    assert_eq!(count_of(&state, phrase), Some(1));
}

#[tokio::test]
async fn http_unknown_session_is_not_found() {
    let server = shared_server().await;
    let client = Client::new();
    let id = new_session(&client, &server).await;

    let response = client
        .delete(format!("{}/api/sessions/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/api/sessions/{id}/visible", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_remote_failures_are_no_data() {
    let server = shared_server().await;
    let client = Client::new();

    let surahs: Vec<Value> = client
        .get(format!("{}/api/quran/surahs", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(surahs.is_empty());

    let response = client
        .get(format!("{}/api/prayer-times?city=Lahore&country=Pakistan", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{}/api/prayer-times?city=&country=Pakistan", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_duas_can_be_filtered() {
    let server = shared_server().await;
    let client = Client::new();

    let sections: Vec<Value> = client
        .get(format!("{}/api/duas?category=protection", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["title"], "Protection Duas");

    let html = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("JannahWay Portal"));
}

#[tokio::test]
async fn http_name_carousel_steps_and_wraps() {
    let server = shared_server().await;
    let client = Client::new();
    let id = new_session(&client, &server).await;

    let state = act(&client, &server, &id, json!({ "action": "prev_name", "list": "asma_ul_husna" })).await;
    let names = state["names"].as_array().unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0]["list"], "asma_ul_husna");
    assert_eq!(names[0]["position"], 99);
    assert_eq!(names[1]["position"], 1);

    let state = act(&client, &server, &id, json!({ "action": "next_name", "list": "asma_ul_husna" })).await;
    assert_eq!(state["names"][0]["position"], 1);
    assert_eq!(state["names"][0]["english"], "The Most Merciful");
}
