use std::fs;
use std::path::PathBuf;

use hufzip::compression::compress::compress;
use hufzip::compression::decompress::decompress;
use hufzip::tools::cli::{HufOpts, Mode};
use hufzip::Error;

/// Fresh scratch directory for one test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hufzip-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn opts(files: Vec<PathBuf>, codec: &str, mode: Mode) -> HufOpts {
    let mut opts = HufOpts::new();
    opts.files = files;
    opts.codec = codec.to_string();
    opts.op_mode = mode;
    opts
}

#[test]
fn compress_then_decompress_huffman() {
    let dir = scratch("huffman");
    let input = dir.join("story.txt");
    let text = b"once upon a time there was a tiny huffman tree ".repeat(50);
    fs::write(&input, &text).unwrap();

    let reports = compress(&opts(vec![input.clone()], "huffman", Mode::Zip)).unwrap();
    assert_eq!(reports.len(), 1);
    let compressed = dir.join("story_huffman_compressed.txt");
    assert_eq!(reports[0].output, compressed);
    assert_eq!(reports[0].original_size, text.len());
    assert!(reports[0].ratio() > 1.0);

    let reports = decompress(&opts(vec![compressed], "huffman", Mode::Unzip), false).unwrap();
    let restored = dir.join("story_decompressed.txt");
    assert_eq!(reports[0].output.as_ref(), Some(&restored));
    assert_eq!(fs::read(restored).unwrap(), text);
    // Input is left in place
    assert!(input.exists());
}

#[test]
fn compress_then_decompress_rle_into_output_dir() {
    let dir = scratch("rle");
    let out = dir.join("out");
    let input = dir.join("runs.bin");
    let data = [vec![0_u8; 700], vec![1_u8; 3], vec![2_u8; 300]].concat();
    fs::write(&input, &data).unwrap();

    let mut zip = opts(vec![input], "rle", Mode::Zip);
    zip.output_dir = Some(out.clone());
    compress(&zip).unwrap();
    let compressed = out.join("runs_rle_compressed.bin");
    assert!(compressed.exists());

    let mut unzip = opts(vec![compressed], "", Mode::Unzip);
    unzip.output_dir = Some(out.clone());
    decompress(&unzip, false).unwrap();
    assert_eq!(fs::read(out.join("runs_decompressed.bin")).unwrap(), data);
}

#[test]
fn empty_file_roundtrip() {
    let dir = scratch("empty");
    let input = dir.join("nothing.dat");
    fs::write(&input, b"").unwrap();

    let reports = compress(&opts(vec![input], "huffman", Mode::Zip)).unwrap();
    assert_eq!(reports[0].compressed_size, 0);
    assert!(reports[0].ratio().is_infinite());

    let compressed = dir.join("nothing_huffman_compressed.dat");
    decompress(&opts(vec![compressed], "", Mode::Unzip), false).unwrap();
    assert!(fs::read(dir.join("nothing_decompressed.dat")).unwrap().is_empty());
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = scratch("overwrite");
    let input = dir.join("a.txt");
    fs::write(&input, b"abababab").unwrap();

    let mut zip = opts(vec![input], "huffman", Mode::Zip);
    compress(&zip).unwrap();
    assert!(matches!(compress(&zip), Err(Error::OutputExists(_))));
    zip.force_overwrite = true;
    assert!(compress(&zip).is_ok());
}

#[test]
fn test_mode_writes_nothing() {
    let dir = scratch("testmode");
    let input = dir.join("t.txt");
    fs::write(&input, b"test mode only decodes").unwrap();
    compress(&opts(vec![input], "huffman", Mode::Zip)).unwrap();

    let compressed = dir.join("t_huffman_compressed.txt");
    let reports = decompress(&opts(vec![compressed], "", Mode::Test), true).unwrap();
    assert!(reports[0].output.is_none());
    assert_eq!(reports[0].decompressed_size, 22);
    assert!(!dir.join("t_decompressed.txt").exists());
}

#[test]
fn corrupt_file_is_reported() {
    let dir = scratch("corrupt");
    let compressed = dir.join("x_huffman_compressed.txt");
    fs::write(&compressed, [0, 0, 0, 40, 1]).unwrap();
    let result = decompress(&opts(vec![compressed], "", Mode::Unzip), false);
    assert!(matches!(result, Err(Error::MalformedHeader(_))));
}

#[test]
fn bad_names_and_codecs() {
    let dir = scratch("names");
    let plain = dir.join("plain.txt");
    fs::write(&plain, b"x").unwrap();
    assert!(matches!(
        decompress(&opts(vec![plain.clone()], "", Mode::Unzip), false),
        Err(Error::BadFileName(_))
    ));
    assert!(matches!(
        compress(&opts(vec![plain], "zstd", Mode::Zip)),
        Err(Error::UnknownCodec(_))
    ));

    let unknown = dir.join("plain_lzw_compressed.txt");
    fs::write(&unknown, b"x").unwrap();
    assert!(matches!(
        decompress(&opts(vec![unknown], "", Mode::Unzip), false),
        Err(Error::UnknownCodec(_))
    ));
}
