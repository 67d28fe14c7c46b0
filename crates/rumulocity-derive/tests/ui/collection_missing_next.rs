#![allow(dead_code)]

use rumulocity_derive::Collection;

#[derive(Collection)]
struct AuditPage {
    prev: String,
    #[jsonc(collection)]
    records: Vec<String>,
}

fn main() {}
