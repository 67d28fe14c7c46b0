#![allow(dead_code)]

use rumulocity_derive::Collection;

#[derive(Collection)]
struct AuditPage {
    next: String,
    prev: String,
    #[jsonc(collection)]
    records: Vec<String>,
    #[jsonc(collection)]
    archived: Vec<String>,
}

fn main() {}
