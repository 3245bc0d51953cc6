//! WAV carriers loaded through `hound`.

use crate::carrier::PcmSamples;
use crate::error::{Error, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Cursor, Read};
use std::path::Path;

/// A 16-bit integer PCM WAV file held in memory.
#[derive(Debug, Clone)]
pub struct WavCarrier {
    spec: WavSpec,
    /// Interleaved samples in file order.
    samples: Vec<i16>,
}

impl WavCarrier {
    /// Load a WAV file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = WavReader::open(path).map_err(|e| Error::AudioLoad(e.to_string()))?;
        Self::from_reader(reader)
    }

    /// Load a WAV file from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader =
            WavReader::new(Cursor::new(bytes)).map_err(|e| Error::AudioLoad(e.to_string()))?;
        Self::from_reader(reader)
    }

    /// Build a carrier from a spec and interleaved samples.
    pub fn from_samples(spec: WavSpec, samples: Vec<i16>) -> Result<Self> {
        Self::check_spec(&spec)?;
        Ok(Self { spec, samples })
    }

    fn from_reader<R: Read>(reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        Self::check_spec(&spec)?;

        let samples = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::AudioLoad(e.to_string()))?;

        Ok(Self { spec, samples })
    }

    fn check_spec(spec: &WavSpec) -> Result<()> {
        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(Error::UnsupportedFormat(format!(
                "only 16-bit PCM WAV is supported, got {} bits {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }
        Ok(())
    }

    /// Audio specification (channels, sample rate, bit depth).
    pub fn spec(&self) -> &WavSpec {
        &self.spec
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        let frames = self.samples.len() / usize::from(self.spec.channels.max(1));
        frames as f64 / f64::from(self.spec.sample_rate)
    }

    /// Read-only sample view.
    pub fn samples(&self) -> PcmSamples<&[i16]> {
        PcmSamples::new(self.samples.as_slice())
    }

    /// Writable sample view.
    pub fn samples_mut(&mut self) -> PcmSamples<&mut [i16]> {
        PcmSamples::new(self.samples.as_mut_slice())
    }

    /// Write the audio to a WAV file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer =
            WavWriter::create(path, self.spec).map_err(|e| Error::AudioSave(e.to_string()))?;
        self.write_all(writer)
    }

    /// Encode the audio as WAV bytes.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let writer = WavWriter::new(Cursor::new(&mut bytes), self.spec)
                .map_err(|e| Error::AudioSave(e.to_string()))?;
            self.write_all(writer)?;
        }
        Ok(bytes)
    }

    fn write_all<W: std::io::Write + std::io::Seek>(&self, mut writer: WavWriter<W>) -> Result<()> {
        for &sample in &self.samples {
            writer
                .write_sample(sample)
                .map_err(|e| Error::AudioSave(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| Error::AudioSave(e.to_string()))
    }
}
