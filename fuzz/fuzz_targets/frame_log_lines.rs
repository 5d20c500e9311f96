#![no_main]

use std::io::Cursor;

use fotograma::frame_log;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must parse or fail with an error, never panic
    let _ = frame_log::read_lines(Cursor::new(data));
});
