//! core/tags/fixture.rs
//! Minimal on-disk containers for codec tests. No audio frames, only the
//! metadata blocks lofty needs to open them.

use std::fs;
use std::path::Path;

const BLOCK_STREAMINFO: u8 = 0;
const BLOCK_VORBIS_COMMENT: u8 = 4;
const BLOCK_PICTURE: u8 = 6;
const LAST_BLOCK: u8 = 0x80;

/// 44.1 kHz, stereo, 16 bit, one second of samples, zeroed MD5.
const STREAMINFO: [u8; 34] = [
    0x10, 0x00, // min block size 4096
    0x10, 0x00, // max block size 4096
    0x00, 0x00, 0x00, // min frame size
    0x00, 0x00, 0x00, // max frame size
    0x0A, 0xC4, 0x42, 0xF0, // rate 44100, 2 channels, 16 bps, samples hi
    0x00, 0x00, 0xAC, 0x44, // samples lo = 44100
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Smallest JPEG lofty can size: SOI, JFIF APP0, a 1x1 SOF0, EOI.
pub(crate) const TINY_JPEG: [u8; 41] = [
    0xFF, 0xD8, //
    0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00,
    0x01, 0x00, 0x00, //
    0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x01, 0x00, 0x01, 0x03, 0x01, 0x11, 0x00, 0x02, 0x11,
    0x01, 0x03, 0x11, 0x01, //
    0xFF, 0xD9,
];

fn push_block(out: &mut Vec<u8>, kind: u8, last: bool, body: &[u8]) {
    let header = if last { kind | LAST_BLOCK } else { kind };
    let len = body.len() as u32;
    out.push(header);
    out.extend_from_slice(&len.to_be_bytes()[1..]);
    out.extend_from_slice(body);
}

fn vorbis_comment_body(comments: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"retag tests";
    let mut body = Vec::new();
    body.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    body.extend_from_slice(vendor);
    body.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for (key, value) in comments {
        let entry = format!("{key}={value}");
        body.extend_from_slice(&(entry.len() as u32).to_le_bytes());
        body.extend_from_slice(entry.as_bytes());
    }
    body
}

/// FLAC PICTURE block: type 0 ("other"), PNG, described "old".
fn picture_body(data: &[u8]) -> Vec<u8> {
    let mime = b"image/png";
    let description = b"old";
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&(mime.len() as u32).to_be_bytes());
    body.extend_from_slice(mime);
    body.extend_from_slice(&(description.len() as u32).to_be_bytes());
    body.extend_from_slice(description);
    // width, height, depth, colours
    for _ in 0..4 {
        body.extend_from_slice(&0u32.to_be_bytes());
    }
    body.extend_from_slice(&(data.len() as u32).to_be_bytes());
    body.extend_from_slice(data);
    body
}

/// Write a FLAC holding `comments` (in order) and `pictures` PICTURE blocks.
pub(crate) fn write_flac(path: &Path, comments: &[(&str, &str)], pictures: usize) {
    let mut out = b"fLaC".to_vec();
    push_block(&mut out, BLOCK_STREAMINFO, false, &STREAMINFO);
    push_block(&mut out, BLOCK_VORBIS_COMMENT, pictures == 0, &vorbis_comment_body(comments));
    for i in 0..pictures {
        let last = i + 1 == pictures;
        push_block(&mut out, BLOCK_PICTURE, last, &picture_body(&[i as u8; 8]));
    }
    fs::write(path, out).unwrap();
}

/// Write an untagged PCM WAV with a few silent frames.
pub(crate) fn write_wav(path: &Path) {
    let samples = [0u8; 16];
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes()); // PCM
    fmt.extend_from_slice(&2u16.to_le_bytes()); // channels
    fmt.extend_from_slice(&44_100u32.to_le_bytes());
    fmt.extend_from_slice(&(44_100u32 * 4).to_le_bytes()); // byte rate
    fmt.extend_from_slice(&4u16.to_le_bytes()); // block align
    fmt.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    let riff_len = 4 + (8 + fmt.len()) + (8 + samples.len());
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(riff_len as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
    out.extend_from_slice(&fmt);
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(samples.len() as u32).to_le_bytes());
    out.extend_from_slice(&samples);
    fs::write(path, out).unwrap();
}
