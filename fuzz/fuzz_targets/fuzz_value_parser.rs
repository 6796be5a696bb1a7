#![no_main]

use libfuzzer_sys::fuzz_target;

use dftcalc_lib::input::{parse_complex, parse_text};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Must never panic; errors are fine.
    let _ = parse_complex(text);
    let _ = parse_text(text, std::path::Path::new("<fuzz>"));
});
