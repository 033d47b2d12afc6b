//! Static file server for the built web client
//!
//! Serves `dist/` on port 8080. Any path that is not a file under `dist/`
//! gets `index.html`, so deep links such as `/CoopDashboard/Members` load
//! the app and the client-side router takes over.
//!
//! `MARKET_WEB_ADDR` and `MARKET_WEB_DIST` override the address and the
//! directory.

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

use market_web::routing::{select_layout, RouteLocation};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";
const INDEX: &str = "index.html";

/// What a request path maps to.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    /// Not a file: hand the path to the client-side router.
    AppShell,
}

fn main() {
    let addr = env::var("MARKET_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let dist = PathBuf::from(env::var("MARKET_WEB_DIST").unwrap_or_else(|_| DEFAULT_DIST.to_string()));

    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("AgroMarket web server running at http://{}", addr);
    println!("Serving from {}/", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let href = request_line.split_whitespace().nth(1).unwrap_or("/");
    let location = RouteLocation::parse(href);

    let (status, body, content_type) = match resolve(dist, &location.pathname) {
        Target::File(path) => match fs::read(&path) {
            Ok(contents) => ("200 OK", contents, content_type(&path)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                app_shell(dist)
            }
        },
        Target::AppShell => {
            println!(
                "{} -> {} ({} layout)",
                location.pathname,
                INDEX,
                select_layout(&location.pathname).name()
            );
            app_shell(dist)
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

fn app_shell(dist: &Path) -> (&'static str, Vec<u8>, &'static str) {
    match fs::read(dist.join(INDEX)) {
        Ok(contents) => ("200 OK", contents, "text/html; charset=utf-8"),
        Err(_) => {
            eprintln!("{} not found in {}", INDEX, dist.display());
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    }
}

/// Map a request path to a file under `dist`. Paths that leave `dist`,
/// directories and missing files all go to the app shell.
fn resolve(dist: &Path, pathname: &str) -> Target {
    let relative = Path::new(pathname.trim_start_matches('/'));
    if relative.as_os_str().is_empty() {
        return Target::AppShell;
    }
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return Target::AppShell;
    }
    let candidate = dist.join(relative);
    if candidate.is_file() {
        Target::File(candidate)
    } else {
        Target::AppShell
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_with_assets() -> PathBuf {
        let dir = env::temp_dir().join(format!("market-web-serve-{}", std::process::id()));
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::write(dir.join(INDEX), "<html></html>").unwrap();
        fs::write(dir.join("assets/app.wasm"), [0u8, 97, 115, 109]).unwrap();
        dir
    }

    #[test]
    fn test_client_routes_fall_back_to_app_shell() {
        let dist = dist_with_assets();
        assert_eq!(resolve(&dist, "/"), Target::AppShell);
        assert_eq!(resolve(&dist, "/CoopDashboard/Members"), Target::AppShell);
        assert_eq!(resolve(&dist, "/assets"), Target::AppShell);
    }

    #[test]
    fn test_existing_files_are_served() {
        let dist = dist_with_assets();
        let target = resolve(&dist, "/assets/app.wasm");
        assert_eq!(target, Target::File(dist.join("assets/app.wasm")));
        if let Target::File(path) = target {
            assert_eq!(content_type(&path), "application/wasm");
        }
    }

    #[test]
    fn test_parent_segments_never_leave_dist() {
        let dist = dist_with_assets();
        assert_eq!(resolve(&dist, "/../Cargo.toml"), Target::AppShell);
        assert_eq!(resolve(&dist, "/assets/../../etc/passwd"), Target::AppShell);
    }
}
