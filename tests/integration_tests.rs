//! Integration tests for end-to-end hide/reveal through real carrier files.

use hound::{SampleFormat, WavSpec};
use image::{Rgba, RgbaImage};
use lsb_steg::carrier::CarrierView;
use lsb_steg::storage::{CarrierFile, ImageCarrier, WavCarrier};
use lsb_steg::{CarrierKind, Error};
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to write a gradient PNG cover into a temp dir.
fn setup_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x ^ y) % 256) as u8,
            255,
        ])
    });
    image.save(&path).expect("Failed to write cover image");
    path
}

/// Helper to write a stereo WAV cover into a temp dir.
fn setup_wav(dir: &TempDir, name: &str, frames: usize) -> PathBuf {
    let path = dir.path().join(name);
    let spec = WavSpec {
        channels: 2,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let samples: Vec<i16> = (0..frames * 2)
        .map(|i| {
            let t = (i / 2) as f64 / 22050.0;
            let amplitude = if i % 2 == 0 { 30000.0 } else { -12000.0 };
            (f64::sin(2.0 * std::f64::consts::PI * 330.0 * t) * amplitude) as i16
        })
        .collect();
    WavCarrier::from_samples(spec, samples)
        .expect("Failed to build cover audio")
        .save(&path)
        .expect("Failed to write cover audio");
    path
}

#[test]
fn test_full_workflow_png() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cover = setup_png(&dir, "cover.png", 64, 48);
    let output = dir.path().join("stego.png");

    let mut carrier = CarrierFile::open(&cover, None).expect("Failed to open cover");
    let message = "Hello, World! This is a secret message.";
    carrier.hide(message, None).expect("Failed to hide");
    carrier.save(&output).expect("Failed to save");
    drop(carrier);

    let carrier = CarrierFile::open(&output, None).expect("Failed to reopen");
    assert_eq!(carrier.reveal(None).expect("Failed to reveal"), message);
}

#[test]
fn test_full_workflow_wav_with_password() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cover = setup_wav(&dir, "cover.wav", 4000);
    let output = dir.path().join("stego.wav");

    let mut carrier = CarrierFile::open(&cover, None).expect("Failed to open cover");
    assert_eq!(carrier.kind(), CarrierKind::Audio);

    let message = "Ünïcödé and 🦀 survive the trip";
    let summary = carrier
        .hide(message, Some("correct horse"))
        .expect("Failed to hide");
    assert!(summary.obfuscated);
    carrier.save(&output).expect("Failed to save");

    let carrier = CarrierFile::open(&output, None).expect("Failed to reopen");
    assert_eq!(
        carrier.reveal(Some("correct horse")).expect("Failed to reveal"),
        message
    );
}

#[test]
fn test_bmp_is_lossless_carrier() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cover = setup_png(&dir, "cover.png", 20, 20);
    let output = dir.path().join("stego.bmp");

    let mut carrier = CarrierFile::open(&cover, None).unwrap();
    carrier.hide("bitmap", None).unwrap();
    carrier.save(&output).unwrap();

    let carrier = CarrierFile::open(&output, None).unwrap();
    assert_eq!(carrier.reveal(None).unwrap(), "bitmap");
}

#[test]
fn test_perturbation_bounded_and_tail_untouched() {
    let dir = TempDir::new().unwrap();
    let cover = setup_png(&dir, "cover.png", 32, 32);

    let original = ImageCarrier::open(&cover).unwrap();
    let mut stego = original.clone();

    let message = "bounded";
    let summary = lsb_steg::stego::hide_text(&mut stego.channels_mut(), message, None).unwrap();

    let before = original.channels();
    let after = stego.channels();
    for i in 0..before.len() {
        let delta = i32::from(after.sample(i)) - i32::from(before.sample(i));
        assert!(delta.abs() <= 1, "slot {} moved by {}", i, delta);
        if i >= summary.frame_bits {
            assert_eq!(delta, 0, "slot {} past the frame was modified", i);
        }
    }

    // alpha channel identical byte for byte
    for (a, b) in original.image().pixels().zip(stego.image().pixels()) {
        assert_eq!(a.0[3], b.0[3]);
    }
}

#[test]
fn test_capacity_exceeded_file_not_written() {
    let dir = TempDir::new().unwrap();
    let cover = setup_png(&dir, "tiny.png", 4, 4);
    let cover_bytes = std::fs::read(&cover).unwrap();

    let mut carrier = CarrierFile::open(&cover, None).unwrap();
    let report = carrier.capacity_report();
    assert_eq!(report.slots, 48);

    let result = carrier.hide("HI", None);
    assert!(result.is_ok());

    let result = carrier.hide("HI!", None);
    assert!(matches!(
        result,
        Err(Error::CapacityExceeded {
            needed: 56,
            available: 48
        })
    ));

    // the cover file on disk is never touched by hide
    assert_eq!(std::fs::read(&cover).unwrap(), cover_bytes);
}

#[test]
fn test_reencode_overwrites_previous_message() {
    let dir = TempDir::new().unwrap();
    let cover = setup_wav(&dir, "cover.wav", 2000);

    let mut carrier = CarrierFile::open(&cover, None).unwrap();
    carrier.hide("a fairly long first message", None).unwrap();
    carrier.hide("short", None).unwrap();

    assert_eq!(carrier.reveal(None).unwrap(), "short");
}

#[test]
fn test_capacity_report_json() {
    let dir = TempDir::new().unwrap();
    let cover = setup_wav(&dir, "cover.wav", 100);

    let report = CarrierFile::open(&cover, None).unwrap().capacity_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["slots"], 200);
    assert_eq!(json["header_bits"], 32);
    assert_eq!(json["max_payload_bits"], 168);
    assert_eq!(json["max_text_bytes"], 21);
}
