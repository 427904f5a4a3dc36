// tests/http_source.rs
//
// HttpSource against a local server: page 1 served, page 2 missing.

use std::thread;

use book_scrape::config::options::ScrapeOptions;
use book_scrape::core::net::{FetchError, HttpSource};
use book_scrape::scrape::{self, StopReason};
use tiny_http::{Header, Response, Server};

const PAGE: &str = include_str!("fixtures/catalogue_page.html");

fn serve(requests: usize) -> (String, thread::JoinHandle<Vec<String>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for req in server.incoming_requests().take(requests) {
            seen.push(req.url().to_string());
            let resp = if req.url() == "/catalogue/page-1.html" {
                Response::from_string(PAGE).with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]).unwrap(),
                )
            } else {
                Response::from_string("not found").with_status_code(404)
            };
            req.respond(resp).unwrap();
        }
        seen
    });
    (format!("http://{addr}/catalogue/page-{{n}}.html"), handle)
}

#[test]
fn missing_page_truncates_run() {
    let (template, server) = serve(2);
    let opts = ScrapeOptions { page_url_template: template, pages: 3, ..ScrapeOptions::default() };

    let mut source = HttpSource::new(&opts).unwrap();
    let report = scrape::collect_books(&opts, &mut source, None).unwrap();

    assert_eq!(report.table.len(), 4);
    assert_eq!(report.table.records()[0].price, "£51.77");
    match report.stopped {
        Some(StopReason::Fetch { page: 2, error: FetchError::Status { status, .. } }) => assert_eq!(status, 404),
        other => panic!("unexpected stop: {other:?}"),
    }

    let seen = server.join().unwrap();
    assert_eq!(seen, vec!["/catalogue/page-1.html", "/catalogue/page-2.html"]);
}

#[test]
fn unreachable_host_is_transport_error() {
    // bind then drop to get a closed port
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let opts = ScrapeOptions {
        page_url_template: format!("http://127.0.0.1:{port}/page-{{n}}.html"),
        pages: 2,
        ..ScrapeOptions::default()
    };
    let mut source = HttpSource::new(&opts).unwrap();
    let report = scrape::collect_books(&opts, &mut source, None).unwrap();
    assert!(report.table.is_empty());
    assert!(matches!(
        report.stopped,
        Some(StopReason::Fetch { page: 1, error: FetchError::Transport { .. } })
    ));
}
