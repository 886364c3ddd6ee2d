use urlsplit::{ParsedUrl, parse_url};

fn main() {
    // Split a URL into its raw parts
    let url = parse_url("https://example.com:8080/docs%20v2?query=value&flag#hash");

    println!("URL: {url}"); // https://example.com:8080/docs%20v2?query=value&flag#hash
    println!("Scheme: {}", url.scheme()); // https
    println!("Host: {}", url.host()); // example.com
    println!("Port: {}", url.port()); // 8080
    println!("Path: {}", url.path()); // /docs%20v2
    println!("Raw query: {}", url.raw_query()); // query=value&flag
    println!("Fragment: {}", url.fragment()); // hash
    println!();

    // Decoded, re-encoded view
    let parsed = ParsedUrl::from_url(&url);
    println!("Decoded path: {}", parsed.path()); // /docs v2
    println!("Raw path: {:?}", parsed.raw_path()); // Some("/docs%20v2")
    println!("Normalized query: {}", parsed.raw_query()); // query=value&flag=
    println!("Query was canonical: {}", parsed.is_query_canonical()); // false
}
