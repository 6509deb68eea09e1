//! HTTP stock source against a throwaway local server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use screener_core::table::{render_row, CellTone};
use screener_core::{FetchError, HttpStockSource, ScreenerConfig, StockSource, ViewState};

/// Serve exactly one canned HTTP response, returning the base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}"), handle)
}

fn source_for(base_url: String) -> HttpStockSource {
    let config = ScreenerConfig {
        base_url,
        timeout_secs: Some(5),
        ..ScreenerConfig::default()
    };
    // Keep loopback traffic away from any proxy configured in the environment.
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();
    HttpStockSource::with_client(client, config.stocks_url())
}

#[test]
fn fetches_and_decodes_payload() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"halal":[{"ticker":"AAPL","companyName":"Apple Inc.","status":"Halal ✅","sector":"Technology","price":189.3,"rvol":1.4,"volume":51000000,"change":0.82}]}"#,
    );
    let rows = source_for(base).fetch_all().unwrap();
    let request = server.join().unwrap();

    assert!(request.starts_with("GET /stocks-screener HTTP/1.1"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sector.as_deref(), Some("Technology"));
}

#[test]
fn non_success_status_is_an_error() {
    let (base, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
    let result = source_for(base).fetch_all();
    server.join().unwrap();
    assert_eq!(result, Err(FetchError::Status { status: 500 }));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (base, server) = serve_once("200 OK", r#"{"stocks":[]}"#);
    let result = source_for(base).fetch_all();
    server.join().unwrap();
    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[test]
fn refused_connection_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let result = source_for(format!("http://127.0.0.1:{port}")).fetch_all();
    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[test]
fn scenario_load_and_render() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"halal":[{"ticker":"ABC","companyName":"Able Co","status":"Halal","price":10.5,"change":-2.345}]}"#,
    );
    let source = source_for(base);

    let mut view = ViewState::new();
    view.begin_fetch();
    view.finish_fetch(source.fetch_all());
    server.join().unwrap();

    assert!(!view.loading);
    assert!(view.error.is_none());
    assert_eq!(view.rows.len(), 1);

    let rendered = render_row(&view.rows[0]);
    assert_eq!(
        rendered.to_string(),
        "ABC | Able Co | Halal | N/A | $10.50 | N/A | N/A | -2.35%"
    );
    assert_eq!(rendered.status_tone, CellTone::Positive);
    assert_eq!(rendered.change_tone, CellTone::Negative);
}

#[test]
fn failed_reload_keeps_loaded_rows() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"halal":[{"ticker":"KO","companyName":"Coca-Cola","status":"Halal"}]}"#,
    );
    let mut view = ViewState::new();
    view.begin_fetch();
    view.finish_fetch(source_for(base).fetch_all());
    server.join().unwrap();

    let (base, server) = serve_once("503 Service Unavailable", "");
    view.begin_fetch();
    view.finish_fetch(source_for(base).fetch_all());
    server.join().unwrap();

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.error.as_deref(), Some("Failed to load stocks."));
    assert!(!view.loading);
}
