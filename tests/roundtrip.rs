use zenrawpng::*;

struct Decoded {
    width: u32,
    height: u32,
    color_type: png::ColorType,
    pixels: Vec<u8>,
    text: Vec<(String, String)>,
}

fn decode(data: &[u8]) -> Decoded {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels).unwrap();
    pixels.truncate(info.buffer_size());
    reader.finish().unwrap();
    let text = reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|t| (t.keyword.clone(), t.text.clone()))
        .collect();
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    Decoded {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        pixels,
        text,
    }
}

fn assert_chunks_valid(data: &[u8]) {
    assert_eq!(&data[..8], PNG_SIGNATURE);
    let mut total = 8;
    for chunk in RawChunkIter::new(data) {
        assert!(chunk.crc_matches(), "bad crc on {:?}", chunk.ty);
        total += 12 + chunk.payload.len();
    }
    assert_eq!(total, data.len(), "chunk lengths do not cover the file");
}

const COLORS: [[u8; 4]; 4] = [
    [0, 0, 0, 255],
    [255, 255, 255, 255],
    [200, 100, 50, 128],
    [17, 230, 99, 7],
];

const SIZES: [(u32, u32); 6] = [(1, 1), (4, 4), (7, 3), (1, 9), (9, 1), (13, 5)];

#[test]
fn solid_colors_decode_exactly() {
    for color in COLORS {
        for (w, h) in SIZES {
            let pixels: Vec<u8> = color.repeat((w * h) as usize);
            for color_type in ColorType::ALL {
                let encoded = EncodeRequest::new()
                    .with_pixels(&pixels)
                    .with_color_type(color_type)
                    .with_size(w, h)
                    .encode()
                    .unwrap();
                assert_chunks_valid(&encoded);

                let decoded = decode(&encoded);
                assert_eq!((decoded.width, decoded.height), (w, h));

                let [r, g, b, a] = color;
                let gray = ((r as u32 + g as u32 + b as u32) / 3) as u8;
                let (expected_type, expected): (png::ColorType, Vec<u8>) = match color_type {
                    ColorType::Grayscale => (png::ColorType::Grayscale, vec![gray]),
                    ColorType::Truecolor => (png::ColorType::Rgb, vec![r, g, b]),
                    ColorType::GrayscaleAlpha => (png::ColorType::GrayscaleAlpha, vec![gray, a]),
                    ColorType::TruecolorAlpha => (png::ColorType::Rgba, vec![r, g, b, a]),
                };
                assert_eq!(decoded.color_type, expected_type);
                assert_eq!(
                    decoded.pixels,
                    expected.repeat((w * h) as usize),
                    "{color:?} {w}x{h} {color_type}"
                );
            }
        }
    }
}

#[test]
fn text_chunks_in_order() {
    let pixels = [9u8; 4 * 4];
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_meta("Title", "Four pixels")
        .with_meta("Author", "")
        .with_meta("Comment", "second line\nhere")
        .encode()
        .unwrap();
    assert_chunks_valid(&encoded);

    let decoded = decode(&encoded);
    assert_eq!(
        decoded.text,
        vec![
            ("Title".to_string(), "Four pixels".to_string()),
            ("Author".to_string(), String::new()),
            ("Comment".to_string(), "second line\nhere".to_string()),
        ]
    );
}

#[test]
fn long_keyword_is_cut() {
    let keyword = "k".repeat(120);
    let encoded = EncodeRequest::new()
        .with_pixels(&[1, 2, 3, 4])
        .with_meta(keyword, "v")
        .encode()
        .unwrap();
    let text = RawChunkIter::new(&encoded)
        .find(|c| c.ty == ChunkType::tEXt)
        .unwrap();
    assert_eq!(text.payload.len(), MAX_KEYWORD_LEN + 2);
    assert_eq!(text.payload[MAX_KEYWORD_LEN], 0);
    assert_eq!(decode(&encoded).text[0].0.len(), MAX_KEYWORD_LEN);
}

#[test]
fn nul_in_keyword_is_dropped() {
    let encoded = EncodeRequest::new()
        .with_pixels(&[1, 2, 3, 4])
        .with_meta("Ti\0tle", "x\0y")
        .encode()
        .unwrap();
    assert_chunks_valid(&encoded);
    let text = decode(&encoded).text;
    assert_eq!(text, vec![("Title".to_string(), "xy".to_string())]);
}

#[test]
fn image_spanning_many_stored_blocks() {
    // 300 x 200 RGBA rows: 240_200 scanline bytes, 8 stored blocks.
    let (w, h) = (300u32, 200u32);
    let mut pixels = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, (x + y) as u8]);
        }
    }
    let encoded = encode_png(&pixels, w, h, PixelLayout::Rgba8).unwrap();
    assert_chunks_valid(&encoded);
    let decoded = decode(&encoded);
    assert_eq!(decoded.color_type, png::ColorType::Rgba);
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn idat_inflates_to_scanlines() {
    let pixels: Vec<u8> = (0..60u8).collect();
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_input_format("rgb")
        .unwrap()
        .with_width(5)
        .encode()
        .unwrap();
    let idat = RawChunkIter::new(&encoded)
        .find(|c| c.ty == ChunkType::IDAT)
        .unwrap();
    let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(idat.payload).unwrap();

    let mut expected = Vec::new();
    for row in pixels.chunks(15) {
        expected.push(0);
        expected.extend_from_slice(row);
    }
    assert_eq!(inflated, expected);
}

#[test]
fn skipped_bytes_then_gray() {
    let pixels = [
        1, 2, 3, 10, //
        4, 5, 6, 20, //
        7, 8, 9, 30, //
        0, 0, 0, 40,
    ];
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_input_format("...G")
        .unwrap()
        .with_color_type(ColorType::GrayscaleAlpha)
        .encode()
        .unwrap();
    let decoded = decode(&encoded);
    assert_eq!((decoded.width, decoded.height), (2, 2));
    assert_eq!(decoded.pixels, [10, 255, 20, 255, 30, 255, 40, 255]);
}

#[test]
fn short_buffer_pads_with_zero() {
    // 5 full RGBA pixels and a 2-byte remainder, in a 3x3 image.
    let mut pixels = [50u8, 60, 70, 80].repeat(5);
    pixels.extend_from_slice(&[1, 2]);
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_color_type(ColorType::TruecolorAlpha)
        .encode()
        .unwrap();
    let decoded = decode(&encoded);
    assert_eq!((decoded.width, decoded.height), (3, 3));
    let mut expected = [50u8, 60, 70, 80].repeat(5);
    expected.extend_from_slice(&[0; 4 * 4]);
    assert_eq!(decoded.pixels, expected);
}

#[test]
fn derived_height_from_width() {
    let pixels = vec![0u8; 10 * 3];
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_input_format("rgb")
        .unwrap()
        .with_width(4)
        .encode()
        .unwrap();
    let decoded = decode(&encoded);
    assert_eq!((decoded.width, decoded.height), (4, 3));
}

#[test]
fn derived_width_from_height() {
    let pixels = vec![0u8; 10];
    let encoded = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_layout(PixelLayout::Gray8)
        .with_height(1)
        .encode()
        .unwrap();
    let decoded = decode(&encoded);
    assert_eq!((decoded.width, decoded.height), (10, 1));
}

#[test]
fn identical_requests_identical_bytes() {
    let pixels: Vec<u8> = (0..40_000u32).map(|i| (i * 7) as u8).collect();
    let build = || {
        EncodeRequest::new()
            .with_pixels(&pixels)
            .with_input_format("bgra")
            .unwrap()
            .with_color_type(ColorType::TruecolorAlpha)
            .with_meta("Software", "zenrawpng")
            .encode()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn format_errors_surface() {
    for bad in ["G r", "rr", "r16", "", "...."] {
        let err = EncodeRequest::new().with_input_format(bad).unwrap_err();
        assert!(matches!(err, PngError::Format(_)), "{bad:?}: {err}");
    }
}

#[test]
fn unknown_color_type() {
    let err = EncodeRequest::new()
        .with_color_type_name("palette")
        .unwrap_err();
    match err {
        PngError::ColorType(ColorTypeError(name)) => assert_eq!(name, "palette"),
        other => panic!("expected ColorType, got {other:?}"),
    }
}

#[test]
fn limits_reject_large() {
    let pixels = vec![255u8; 4 * 100];
    let limits = Limits {
        max_width: Some(5),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_pixels(&pixels)
        .with_limits(&limits)
        .encode();
    match result.unwrap_err() {
        PngError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}
