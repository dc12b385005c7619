//! Dump the aggregated OpenAPI document as pretty-printed JSON.

use utoipa::OpenApi;
use word_blitz_back::services::documentation::ApiDoc;

fn main() {
    let doc = ApiDoc::openapi();
    println!("{}", doc.to_pretty_json().unwrap());
}
