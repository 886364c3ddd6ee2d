/// `QueryPairs` usage example
use urlsplit::{QueryPairs, decode_query, encode_query};

fn main() {
    // Decode a query string into ordered pairs
    let pairs = decode_query("?name=John&tag=a&tag=b&note=hello%20world");
    for (key, value) in &pairs {
        println!("  {key} = {value}");
    }
    println!();

    // Encode them back
    println!("Encoded: {}", encode_query(&pairs)); // name=John&tag=a&tag=b&note=hello%20world
    println!();

    // Work with the container
    let mut params = QueryPairs::from(pairs);
    println!("tag: {:?}", params.get_all("tag")); // ["a", "b"]

    params.set("name", "Jane");
    params.delete("note");
    params.append("city", "Tokyo");
    println!("After edits: {params}"); // name=Jane&tag=a&tag=b&city=Tokyo
}
