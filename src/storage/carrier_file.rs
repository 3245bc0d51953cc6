//! Carrier files of either kind behind one type.

use crate::config::{CarrierKind, StegoConfig};
use crate::error::Result;
use crate::stego::{capacity_report, hide_text, reveal_text, CapacityReport, HideSummary};
use crate::storage::{ImageCarrier, WavCarrier};
use std::path::Path;

/// A loaded carrier file.
#[derive(Debug, Clone)]
pub enum CarrierFile {
    /// RGBA8 image.
    Image(ImageCarrier),
    /// 16-bit PCM WAV.
    Audio(WavCarrier),
}

impl CarrierFile {
    /// Load `path` as the given kind, or detect it from the extension.
    pub fn open(path: &Path, kind: Option<CarrierKind>) -> Result<Self> {
        let kind = StegoConfig::new(None, kind).resolve_kind(path);
        match kind {
            CarrierKind::Image => Ok(CarrierFile::Image(ImageCarrier::open(path)?)),
            CarrierKind::Audio => Ok(CarrierFile::Audio(WavCarrier::open(path)?)),
        }
    }

    /// Kind of this carrier.
    pub fn kind(&self) -> CarrierKind {
        match self {
            CarrierFile::Image(_) => CarrierKind::Image,
            CarrierFile::Audio(_) => CarrierKind::Audio,
        }
    }

    /// Hide `text`, obfuscating it with `password` if given.
    pub fn hide(&mut self, text: &str, password: Option<&str>) -> Result<HideSummary> {
        match self {
            CarrierFile::Image(image) => hide_text(&mut image.channels_mut(), text, password),
            CarrierFile::Audio(audio) => hide_text(&mut audio.samples_mut(), text, password),
        }
    }

    /// Recover hidden text.
    pub fn reveal(&self, password: Option<&str>) -> Result<String> {
        match self {
            CarrierFile::Image(image) => reveal_text(&image.channels(), password),
            CarrierFile::Audio(audio) => reveal_text(&audio.samples(), password),
        }
    }

    /// Capacity of this carrier.
    pub fn capacity_report(&self) -> CapacityReport {
        match self {
            CarrierFile::Image(image) => capacity_report(&image.channels()),
            CarrierFile::Audio(audio) => capacity_report(&audio.samples()),
        }
    }

    /// Write the carrier to `path` in its native format.
    pub fn save(&self, path: &Path) -> Result<()> {
        match self {
            CarrierFile::Image(image) => image.save(path),
            CarrierFile::Audio(audio) => audio.save(path),
        }
    }
}
