#![no_main]
use libfuzzer_sys::fuzz_target;
use zenrawpng::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the color type, second the width, rest is pixels
    let [ct, width, pixels @ ..] = data else {
        return;
    };
    let color_type = ColorType::ALL[*ct as usize % 4];
    let Ok(encoded) = EncodeRequest::new()
        .with_pixels(pixels)
        .with_color_type(color_type)
        .with_width(u32::from(*width))
        .encode()
    else {
        return;
    };

    let mut idat = None;
    for chunk in RawChunkIter::new(&encoded) {
        assert!(chunk.crc_matches(), "bad crc on {:?}", chunk.ty);
        if chunk.ty == ChunkType::IDAT {
            idat = Some(chunk.payload);
        }
    }
    let idat = idat.expect("no IDAT chunk");
    let scanlines =
        miniz_oxide::inflate::decompress_to_vec_zlib(idat).expect("IDAT does not inflate");

    // Every row starts with filter type 0
    let row = 1 + u32::from_be_bytes(encoded[16..20].try_into().unwrap()) as usize
        * color_type.bytes_per_pixel();
    assert_eq!(scanlines.len() % row, 0);
    assert!(scanlines.chunks(row).all(|r| r[0] == 0));
});
