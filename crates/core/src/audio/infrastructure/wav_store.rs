use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Writes a waveform to a 16-bit PCM WAV file.
pub fn write_wav(path: &Path, audio: &AudioSegment) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in audio.samples() {
        writer.write_sample(quantize(*sample))?;
    }
    writer.finalize()
}

/// Reads a WAV file back into a normalized f32 waveform.
///
/// Accepts 16-bit integer and 32-bit float sample formats, the two this
/// pipeline produces.
pub fn read_wav(path: &Path) -> Result<AudioSegment, hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
            .collect::<Result<_, _>>()?,
        (hound::SampleFormat::Float, 32) => {
            reader.samples::<f32>().collect::<Result<_, _>>()?
        }
        _ => return Err(hound::Error::Unsupported),
    };

    Ok(AudioSegment::new(samples, spec.sample_rate, spec.channels))
}

/// Reads a WAV file as raw 16-bit PCM plus its sample rate, the form the
/// recognition wire format wants. Float input is quantized.
pub fn read_pcm16(path: &Path) -> Result<(Vec<i16>, u32), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader.samples::<i16>().collect::<Result<_, _>>()?,
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|s| s.map(quantize))
            .collect::<Result<_, _>>()?,
        _ => return Err(hound::Error::Unsupported),
    };

    Ok((samples, spec.sample_rate))
}

fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
