#![allow(dead_code)]

use rumulocity_derive::Collection;

#[derive(Collection)]
struct AuditPage {
    next: String,
    prev: String,
    records: Vec<String>,
}

fn main() {}
