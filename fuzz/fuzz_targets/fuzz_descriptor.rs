#![no_main]
use libfuzzer_sys::fuzz_target;
use zenrawpng::InputFormat;

fuzz_target!(|data: &[u8]| {
    // Any descriptor must parse or fail cleanly
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(format) = InputFormat::parse(text) else {
        return;
    };

    // Canonical form must parse back to the same layout
    let again = InputFormat::parse(&format.to_string()).expect("canonical form rejected");
    assert_eq!(format, again);
    assert!(format.bytes_per_pixel() > 0);
});
