#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // parse_tags should never panic on arbitrary input
    let _ = labmark::tags::parser::parse_tags(data);
});
