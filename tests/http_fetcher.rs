// tests/http_fetcher.rs
//
// HttpFetcher against a one-shot local HTTP server.
//
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use cinemagia_scrape::FetchError;
use cinemagia_scrape::core::net::{Fetch, HttpFetcher};

/// Answer a single request with `status` and `body`; hand back the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/filme/", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        // Drain headers.
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });

    (base, handle)
}

#[test]
fn sends_page_as_pn_query_and_returns_body() {
    let body = r#"<li class="movie"><div class="title">Film A</div></li>"#;
    let (base, server) = serve_once("200 OK", body);

    let fetcher = HttpFetcher::with_base_url(base);
    let got = fetcher.fetch_page(3).unwrap();

    assert_eq!(got, body);
    assert_eq!(server.join().unwrap(), "GET /filme/?pn=3 HTTP/1.1");
}

#[test]
fn non_success_status_is_a_page_failure() {
    let (base, server) = serve_once("503 Service Unavailable", "busy");

    let fetcher = HttpFetcher::with_base_url(base);
    let err = fetcher.fetch_page(2).unwrap_err();
    server.join().unwrap();

    match err {
        FetchError::Status { page, status } => {
            assert_eq!(page, 2);
            assert_eq!(status, 503);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn unreachable_host_is_a_page_failure() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let fetcher = HttpFetcher::with_base_url(format!("http://127.0.0.1:{port}/filme/"));

    let err = fetcher.fetch_page(1).unwrap_err();
    assert!(matches!(err, FetchError::Http { page: 1, .. }));
}
